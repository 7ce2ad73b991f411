/// The five raw measurements entered by the user.
///
/// `None` means the field is empty. Values are stored exactly as parsed;
/// negative or absurd numbers are not filtered here.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplayInputs {
    /// Vertical resolution in pixels
    pub height_px: Option<f64>,
    /// Horizontal resolution in pixels
    pub width_px: Option<f64>,
    /// Physical screen height in centimeters
    pub screen_height_cm: Option<f64>,
    /// Physical screen width in centimeters
    pub screen_width_cm: Option<f64>,
    /// Distance from the viewer's eye to the screen in centimeters
    pub distance_cm: Option<f64>,
}

impl DisplayInputs {
    pub fn get(&self, field: InputField) -> Option<f64> {
        match field {
            InputField::HeightPx => self.height_px,
            InputField::WidthPx => self.width_px,
            InputField::ScreenHeightCm => self.screen_height_cm,
            InputField::ScreenWidthCm => self.screen_width_cm,
            InputField::DistanceCm => self.distance_cm,
        }
    }

    pub fn set(&mut self, field: InputField, value: Option<f64>) {
        let slot = match field {
            InputField::HeightPx => &mut self.height_px,
            InputField::WidthPx => &mut self.width_px,
            InputField::ScreenHeightCm => &mut self.screen_height_cm,
            InputField::ScreenWidthCm => &mut self.screen_width_cm,
            InputField::DistanceCm => &mut self.distance_cm,
        };
        *slot = value;
    }
}

/// Identifies one raw input field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputField {
    HeightPx,
    WidthPx,
    ScreenHeightCm,
    ScreenWidthCm,
    DistanceCm,
}

impl InputField {
    pub const ALL: [InputField; 5] = [
        InputField::HeightPx,
        InputField::WidthPx,
        InputField::ScreenHeightCm,
        InputField::ScreenWidthCm,
        InputField::DistanceCm,
    ];

    /// Field label, including its unit.
    pub fn label(&self) -> &'static str {
        match self {
            InputField::HeightPx => "縦 (ピクセル数)",
            InputField::WidthPx => "横 (ピクセル数)",
            InputField::ScreenHeightCm => "縦 (cm)",
            InputField::ScreenWidthCm => "横 (cm)",
            InputField::DistanceCm => "画面までの距離 (cm)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inputs_are_all_empty() {
        let inputs = DisplayInputs::default();
        for field in InputField::ALL {
            assert_eq!(inputs.get(field), None);
        }
    }

    #[test]
    fn set_writes_only_the_named_field() {
        let mut inputs = DisplayInputs::default();
        inputs.set(InputField::ScreenWidthCm, Some(53.5));

        assert_eq!(inputs.screen_width_cm, Some(53.5));
        for field in InputField::ALL {
            if field != InputField::ScreenWidthCm {
                assert_eq!(inputs.get(field), None, "{:?} should be untouched", field);
            }
        }
    }

    #[test]
    fn set_none_clears_field() {
        let mut inputs = DisplayInputs {
            distance_cm: Some(60.0),
            ..DisplayInputs::default()
        };
        inputs.set(InputField::DistanceCm, None);
        assert_eq!(inputs.distance_cm, None);
    }
}
