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

/// Outcome vocabulary shared by every query.
///
/// Each result type lists the subset it can emit and what each code means
/// for that pair of primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueryCode {
    /// The query has a unique, ordinary answer.
    Success,
    /// Linear primitives are parallel; the witnesses are one of infinitely
    /// many equally close pairs.
    Parallel,
    /// Bounded parallel primitives share a continuum of closest points, or a
    /// linear primitive lies inside a plane.
    Overlapping,
    Intersecting,
    NotIntersecting,
    CompletelyInside,
    CompletelyOutside,
}

impl QueryCode {
    /// True for the codes that mean the primitives touch.
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            QueryCode::Intersecting | QueryCode::Overlapping | QueryCode::CompletelyInside
        )
    }
}
