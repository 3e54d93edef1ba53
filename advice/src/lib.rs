// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.


//! Estimate the bias built into a voting advice questionnaire by feeding it uniformly random answers.
//!
//! A synthetic voter answers every topic at random; the party agreeing with the most answers is their advice.
//! Batches of such voters form samples, and samples are drawn until the spread between them stops changing.
//! The average over all samples is then compared with a real election outcome.

pub mod alignment;
pub mod real_outcome;
pub mod voter_sampler;
pub mod sample;
pub mod batch_estimator;
pub mod convergence;
pub mod sample_source;
pub mod comparator;
pub mod report;
pub mod config;
pub mod simulation;
