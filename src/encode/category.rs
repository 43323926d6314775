use serde::Serialize;

/// Discrete reading of a z-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    NoData,
    VeryLow,    // z <= -2
    Low,        // -2 < z <= -1
    Normal,     // -1 < z <= 1
    High,       // 1 < z <= 2
    VeryHigh,   // z > 2
}

impl Category {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::NoData => "No data",
            Category::VeryLow => "Very low",
            Category::Low => "Low",
            Category::Normal => "Normal",
            Category::High => "High",
            Category::VeryHigh => "Very high",
        }
    }

    /// Style tag, usable as a CSS class name.
    pub fn tag(&self) -> &'static str {
        match self {
            Category::NoData => "neutral",
            Category::VeryLow => "very-low",
            Category::Low => "low",
            Category::Normal => "normal",
            Category::High => "high",
            Category::VeryHigh => "very-high",
        }
    }
}

impl Serialize for Category {
    /// Serialize as `{ "label": ..., "tag": ... }`.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Category", 2)?;
        s.serialize_field("label", self.label())?;
        s.serialize_field("tag", self.tag())?;
        s.end()
    }
}

/// Bucket a z-score. Each threshold is inclusive on the lower bucket.
pub fn category_for(z: Option<f64>) -> Category {
    match z {
        None => Category::NoData,
        Some(z) if z.is_nan() => Category::NoData,
        Some(z) if z <= -2.0 => Category::VeryLow,
        Some(z) if z <= -1.0 => Category::Low,
        Some(z) if z <= 1.0 => Category::Normal,
        Some(z) if z <= 2.0 => Category::High,
        Some(_) => Category::VeryHigh,
    }
}
