// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Errors raised while building primitives or query configuration.
//!
//! Queries themselves never fail; see [`crate::query`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A line or ray was given a direction of (near) zero length.
    #[error("direction vector has zero length")]
    ZeroDirection,

    /// A plane was given a normal of (near) zero length.
    #[error("plane normal has zero length")]
    ZeroNormal,

    #[error("sphere radius must be finite and non-negative")]
    NegativeRadius,

    #[error("rectangle extents must be finite and non-negative")]
    NegativeExtent,

    #[error("rectangle axes must be unit length and mutually orthogonal")]
    NonOrthonormalAxes,

    #[error("query tolerance must be finite and strictly positive")]
    InvalidTolerance,

    /// Perspective parameters that do not describe a frustum.
    #[error("invalid frustum: {0}")]
    InvalidFrustum(&'static str),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
