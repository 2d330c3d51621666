//! XY charts (bar and line series over shared axes).
//!
//! Orientation and axis declarations are kind-level state rendered right
//! after the keyword line; the series themselves are ordered items, one
//! `bar [...]` or `line [...]` line each, in declaration order. Axis range
//! bounds and series values are signed — charts legitimately go below
//! zero — so no non-negative guard applies to them.

use mermatic_core::{
    BuildError, guard,
    text::{fmt_number, quote_label},
};

use crate::diagram::{Diagram, DiagramKind};

/// One data series in an XY chart.
#[derive(Debug, Clone)]
pub enum XyChartItem {
    /// A bar series.
    Bar(Vec<f64>),
    /// A line series.
    Line(Vec<f64>),
}

/// Scale declaration for one axis.
#[derive(Debug, Clone)]
enum AxisScale {
    /// Discrete category labels.
    Categories(Vec<String>),
    /// A numeric `min --> max` range.
    Range(f64, f64),
}

#[derive(Debug, Clone, Default)]
struct Axis {
    title: Option<String>,
    scale: Option<AxisScale>,
}

impl Axis {
    fn render(&self, keyword: &str, lines: &mut Vec<String>) {
        if self.title.is_none() && self.scale.is_none() {
            return;
        }
        let mut line = keyword.to_owned();
        if let Some(title) = &self.title {
            line.push_str(&format!(" \"{title}\""));
        }
        match &self.scale {
            Some(AxisScale::Categories(labels)) => {
                let labels: Vec<_> = labels.iter().map(|label| quote_label(label)).collect();
                line.push_str(&format!(" [{}]", labels.join(", ")));
            }
            Some(AxisScale::Range(min, max)) => {
                line.push_str(&format!(" {} --> {}", fmt_number(*min), fmt_number(*max)));
            }
            None => {}
        }
        lines.push(line);
    }
}

/// Line-format strategy and kind-level state for XY charts.
#[derive(Debug, Default)]
pub struct XyChart {
    horizontal: bool,
    x_axis: Axis,
    y_axis: Axis,
}

/// An XY chart builder; see [`crate::xychart`] and [`crate::unchecked::xychart`].
pub type XyChartDiagram = Diagram<XyChart>;

impl DiagramKind for XyChart {
    type Item = XyChartItem;

    const NAME: &'static str = "xychart";

    fn keyword(&self) -> String {
        if self.horizontal {
            "xychart horizontal".to_owned()
        } else {
            "xychart".to_owned()
        }
    }

    fn render(&self, items: &[Self::Item], lines: &mut Vec<String>) {
        self.x_axis.render("x-axis", lines);
        self.y_axis.render("y-axis", lines);
        for item in items {
            let (keyword, values) = match item {
                XyChartItem::Bar(values) => ("bar", values),
                XyChartItem::Line(values) => ("line", values),
            };
            let values: Vec<_> = values.iter().map(|value| fmt_number(*value)).collect();
            lines.push(format!("{keyword} [{}]", values.join(", ")));
        }
    }
}

impl XyChartDiagram {
    /// Switches the chart to horizontal orientation.
    pub fn horizontal(mut self) -> Self {
        self.kind_mut().horizontal = true;
        self
    }

    /// Sets the x-axis title.
    ///
    /// # Errors
    ///
    /// In safe mode, a blank title raises [`BuildError::WhiteSpace`].
    pub fn x_axis_title(mut self, title: &str) -> Result<Self, BuildError> {
        guard::require_label(self.mode(), "title", title)?;
        self.kind_mut().x_axis.title = Some(title.to_owned());
        Ok(self)
    }

    /// Sets discrete x-axis categories, replacing any earlier scale.
    ///
    /// # Errors
    ///
    /// In safe mode, an empty list raises [`BuildError::EmptyCollection`]
    /// and blank labels raise [`BuildError::WhiteSpace`].
    pub fn x_axis_categories(mut self, labels: &[&str]) -> Result<Self, BuildError> {
        guard::require_non_empty(self.mode(), "labels", labels)?;
        for label in labels {
            guard::require_label(self.mode(), "label", label)?;
        }
        self.kind_mut().x_axis.scale = Some(AxisScale::Categories(
            labels.iter().map(|label| (*label).to_owned()).collect(),
        ));
        Ok(self)
    }

    /// Sets a numeric x-axis range, replacing any earlier scale.
    pub fn x_axis_range(mut self, min: f64, max: f64) -> Self {
        self.kind_mut().x_axis.scale = Some(AxisScale::Range(min, max));
        self
    }

    /// Sets the y-axis title.
    ///
    /// # Errors
    ///
    /// In safe mode, a blank title raises [`BuildError::WhiteSpace`].
    pub fn y_axis_title(mut self, title: &str) -> Result<Self, BuildError> {
        guard::require_label(self.mode(), "title", title)?;
        self.kind_mut().y_axis.title = Some(title.to_owned());
        Ok(self)
    }

    /// Sets a numeric y-axis range, replacing any earlier scale.
    pub fn y_axis_range(mut self, min: f64, max: f64) -> Self {
        self.kind_mut().y_axis.scale = Some(AxisScale::Range(min, max));
        self
    }

    /// Appends a bar series.
    ///
    /// # Errors
    ///
    /// In safe mode, an empty value list raises
    /// [`BuildError::EmptyCollection`].
    ///
    /// # Examples
    ///
    /// ```
    /// let text = mermatic::xychart(None, None)
    ///     .x_axis_categories(&["jan", "feb"]).unwrap()
    ///     .add_bar(&[5000.0, 6000.0]).unwrap()
    ///     .build();
    /// assert_eq!(text, "xychart\nx-axis [jan, feb]\nbar [5000, 6000]");
    /// ```
    pub fn add_bar(mut self, values: &[f64]) -> Result<Self, BuildError> {
        guard::require_non_empty(self.mode(), "values", values)?;
        self.push(XyChartItem::Bar(values.to_vec()));
        Ok(self)
    }

    /// Appends a line series.
    ///
    /// # Errors
    ///
    /// In safe mode, an empty value list raises
    /// [`BuildError::EmptyCollection`].
    pub fn add_line(mut self, values: &[f64]) -> Result<Self, BuildError> {
        guard::require_non_empty(self.mode(), "values", values)?;
        self.push(XyChartItem::Line(values.to_vec()));
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use mermatic_core::BuildError;

    #[test]
    fn test_empty_chart_renders_keyword_only() {
        assert_eq!(crate::xychart(None, None).build(), "xychart");
    }

    #[test]
    fn test_horizontal_keyword_suffix() {
        assert_eq!(
            crate::xychart(None, None).horizontal().build(),
            "xychart horizontal"
        );
    }

    #[test]
    fn test_axes_render_before_series_in_declaration_order() {
        let text = crate::xychart(None, None)
            .add_bar(&[1.0, 2.0])
            .unwrap()
            .x_axis_title("Months")
            .unwrap()
            .x_axis_categories(&["jan", "feb"])
            .unwrap()
            .y_axis_title("Revenue")
            .unwrap()
            .y_axis_range(0.0, 100.5)
            .add_line(&[-3.0, 4.0])
            .unwrap()
            .build();
        let expected = [
            "xychart",
            "x-axis \"Months\" [jan, feb]",
            "y-axis \"Revenue\" 0 --> 100.5",
            "bar [1, 2]",
            "line [-3, 4]",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_category_labels_with_spaces_are_quoted() {
        let text = crate::xychart(None, None)
            .x_axis_categories(&["first quarter", "q2"])
            .unwrap()
            .build();
        assert_eq!(text, "xychart\nx-axis [\"first quarter\", q2]");
    }

    #[test]
    fn test_safe_mode_rejects_empty_series() {
        let err = crate::xychart(None, None).add_bar(&[]).unwrap_err();
        assert_eq!(err, BuildError::EmptyCollection { parameter: "values" });
    }

    #[test]
    fn test_range_bounds_may_be_negative() {
        let text = crate::xychart(None, None)
            .y_axis_range(-10.0, 10.0)
            .build();
        assert_eq!(text, "xychart\ny-axis -10 --> 10");
    }
}
