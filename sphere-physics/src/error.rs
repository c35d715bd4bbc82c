// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Validation errors
//!
//! Stepping never fails. These types are only produced by the optional
//! validation helpers ([`Params::validate`](crate::Params::validate),
//! [`Body::validate`](crate::Body::validate) and
//! [`World::try_add_body`](crate::World::try_add_body)).

use thiserror::Error;

/// Problems with a [`Params`](crate::Params) configuration
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParamsError {
    /// G must be non-negative and finite
    #[error("gravitational constant {0} must be non-negative and finite")]
    InvalidGravitationalConstant(f64),

    /// Restitution must lie in [0, 1]
    #[error("restitution {0} is outside [0, 1]")]
    RestitutionOutOfRange(f64),

    /// Slop must be non-negative and finite
    #[error("penetration slop {0} must be non-negative and finite")]
    InvalidPenetrationSlop(f64),

    /// Correction percent must lie in (0, 1]
    #[error("position correction percent {0} is outside (0, 1]")]
    CorrectionPercentOutOfRange(f64),
}

/// Problems with a single [`Body`](crate::Body)
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BodyError {
    /// Radius must be positive and finite
    #[error("radius {0} must be positive and finite")]
    NonPositiveRadius(f64),

    /// Inverse mass must be non-negative and finite
    #[error("inverse mass {0} must be non-negative and finite")]
    InvalidInverseMass(f64),

    /// Position or velocity holds NaN or infinity
    #[error("position or velocity is not finite")]
    NonFiniteState,
}

/// Crate-level error
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// Invalid simulation parameters
    #[error("invalid parameters: {0}")]
    Params(#[from] ParamsError),

    /// Invalid body
    #[error("invalid body: {0}")]
    Body(#[from] BodyError),
}

/// Result alias using the crate [`enum@Error`]
pub type Result<T> = std::result::Result<T, Error>;
