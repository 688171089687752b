// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

pub mod config;
pub mod lexicon;
pub mod scorer;

pub use config::PipelineConfig;
pub use lexicon::LexiconScorer;
pub use scorer::{Prediction, Scorer};
