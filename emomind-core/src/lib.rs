// Copyright (c) 2025-2026 brdigetrlol. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Icarus-Proprietary
// See LICENSE in the repository root for full license terms.

pub mod controller;
pub mod mood;
pub mod score;

pub use controller::MoodController;
pub use mood::Mood;
pub use score::ScoreMap;
