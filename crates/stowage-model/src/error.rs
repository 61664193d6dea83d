// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Input-validation error taxonomy.
//!
//! All malformed input is rejected at construction time — a manifest or a
//! constraint set that exists is valid, and the engines are infallible. No
//! error here is retried or recovered from; the caller fixes its input.

use crate::{item::ItemId, weight::Weight};

/// The error type for manifest and constraint validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// An item with a non-positive weight was supplied. The value/weight
    /// ratio used for candidate ordering is undefined for such items.
    InvalidItem { id: ItemId, weight: Weight },
    /// The same identifier was supplied more than once.
    DuplicateItem { id: ItemId },
    /// The constraint set is malformed: the weight cap must be strictly
    /// positive and the minimum item weight non-negative.
    InvalidConstraint {
        max_weight: Weight,
        min_item_weight: Weight,
    },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidItem { id, weight } => {
                write!(f, "Item '{}' has non-positive weight {}", id, weight)
            }
            Self::DuplicateItem { id } => {
                write!(f, "Item identifier '{}' appears more than once", id)
            }
            Self::InvalidConstraint {
                max_weight,
                min_item_weight,
            } => {
                write!(
                    f,
                    "Invalid constraints: max_weight = {}, min_item_weight = {} \
                     (max_weight must be > 0, min_item_weight must be >= 0)",
                    max_weight, min_item_weight
                )
            }
        }
    }
}

impl std::error::Error for ModelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_item() {
        let err = ModelError::InvalidItem {
            id: ItemId::new("b-9"),
            weight: Weight::from_grams(0),
        };
        assert_eq!(
            format!("{}", err),
            "Item 'b-9' has non-positive weight 0.000 kg"
        );
    }

    #[test]
    fn test_display_duplicate_item() {
        let err = ModelError::DuplicateItem {
            id: ItemId::new("b-1"),
        };
        assert_eq!(
            format!("{}", err),
            "Item identifier 'b-1' appears more than once"
        );
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(ModelError::DuplicateItem {
            id: ItemId::new("x"),
        });
        assert!(err.to_string().contains("more than once"));
    }
}
