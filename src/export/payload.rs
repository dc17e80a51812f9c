//! Wire types for the extraction request

use serde::{Deserialize, Serialize};

use crate::domain::{LabeledSelection, Rect};

/// One labeled region as the extraction backend expects it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldRegion {
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&LabeledSelection> for FieldRegion {
    fn from(selection: &LabeledSelection) -> Self {
        Self {
            label: selection.label.clone(),
            x: selection.rect.x,
            y: selection.rect.y,
            width: selection.rect.width,
            height: selection.rect.height,
        }
    }
}

impl From<FieldRegion> for LabeledSelection {
    fn from(region: FieldRegion) -> Self {
        Self {
            label: region.label,
            rect: Rect::new(region.x, region.y, region.width, region.height),
        }
    }
}

/// Build the request payload, preserving selection order
pub fn to_payload(selections: &[LabeledSelection]) -> Vec<FieldRegion> {
    selections.iter().map(FieldRegion::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_preserves_order_and_fields() {
        let selections = vec![
            LabeledSelection {
                label: "Total".to_string(),
                rect: Rect::new(10.0, 10.0, 50.0, 20.0),
            },
            LabeledSelection {
                label: "RFC".to_string(),
                rect: Rect::new(5.0, 5.0, 40.0, 12.0),
            },
        ];

        let payload = to_payload(&selections);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"label": "Total", "x": 10.0, "y": 10.0, "width": 50.0, "height": 20.0},
                {"label": "RFC", "x": 5.0, "y": 5.0, "width": 40.0, "height": 12.0},
            ])
        );
    }
}
