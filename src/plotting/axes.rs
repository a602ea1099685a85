//! Axes (subplot) implementation.

use ndarray::ArrayView2;

use crate::plotting::data::IntoPlotData;
use crate::plotting::element::{
    AxisConfig, Bounds, Colorbar, GridConfig, Legend, Text,
};
use crate::plotting::error::{PlotError, PlotResult};
use crate::plotting::plot::{parse_format, FillBetween, LinePlot, MeshPlot, Plot, VLine};
use crate::plotting::scale::{LinearScale, Scale};
use crate::plotting::style::{Color, Colormap, DashPattern, TextAnchor, ThemeConfig};

/// A single plot area with its own scales, series, labels and legend.
pub struct Axes {
    /// Position within the figure in normalized coordinates (y up)
    pub position: Bounds,
    /// Grid slot `(rows, cols, index)` assigned by the figure layout
    pub(crate) slot: Option<(usize, usize, usize)>,
    /// Figure-unique id, used for clip path and gradient ids
    pub(crate) id: usize,
    pub x_scale: Box<dyn Scale>,
    pub y_scale: Box<dyn Scale>,
    plots: Vec<Box<dyn Plot>>,
    pub title: Option<Text>,
    pub x_label: Option<Text>,
    pub y_label: Option<Text>,
    pub legend: Legend,
    pub grid: GridConfig,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub colorbar: Option<Colorbar>,
    /// Union of the bounds of all plots added so far
    data_bounds: Option<Bounds>,
    /// Colormap and value range of the most recent mesh
    last_mesh: Option<(Colormap, f64, f64)>,
    color_index: usize,
    pub theme: ThemeConfig,
}

impl Axes {
    pub fn new() -> Self {
        Self::with_theme(ThemeConfig::default())
    }

    /// Axes styled by `theme`.
    pub fn with_theme(theme: ThemeConfig) -> Self {
        let mut x_axis = AxisConfig::default();
        x_axis.line_style.color = theme.axis_color.clone();
        x_axis.tick_label_style = theme.tick_style.clone();
        let y_axis = x_axis.clone();

        Axes {
            position: Bounds::new(0.1, 0.9, 0.1, 0.9),
            slot: None,
            id: 0,
            x_scale: Box::new(LinearScale::auto()),
            y_scale: Box::new(LinearScale::auto()),
            plots: Vec::new(),
            title: None,
            x_label: None,
            y_label: None,
            legend: Legend::new(),
            grid: GridConfig {
                visible: theme.show_grid,
                ..GridConfig::default()
            }
            .color(theme.grid_color.clone())
            .opacity(theme.grid_opacity),
            x_axis,
            y_axis,
            colorbar: None,
            data_bounds: None,
            last_mesh: None,
            color_index: 0,
            theme,
        }
    }

    /// Start a line plot.
    pub fn plot(&mut self, x: impl IntoPlotData, y: impl IntoPlotData) -> LinePlotBuilder<'_> {
        LinePlotBuilder {
            plot: LinePlot::new(x.into_plot_data(), y.into_plot_data()),
            axes: self,
            format: None,
            color: None,
            alpha: None,
        }
    }

    /// Add a heatmap of `values` (shape `(y.len(), x.len())`) whose cells
    /// are centered on the given coordinates.
    pub fn pcolormesh(
        &mut self,
        x: impl IntoPlotData,
        y: impl IntoPlotData,
        values: ArrayView2<'_, f64>,
        colormap: Colormap,
    ) -> PlotResult<&mut Self> {
        let mesh = MeshPlot::new(x.into_plot_data(), y.into_plot_data(), values)?.colormap(colormap);
        self.last_mesh = Some((colormap, mesh.vmin, mesh.vmax));
        self.add_plot(Box::new(mesh));
        Ok(self)
    }

    /// Start a shaded region between `y1` and `y2`.
    pub fn fill_between(
        &mut self,
        x: impl IntoPlotData,
        y1: impl IntoPlotData,
        y2: impl IntoPlotData,
    ) -> FillBetweenBuilder<'_> {
        FillBetweenBuilder {
            x: x.into_plot_data(),
            y1: y1.into_plot_data(),
            y2: y2.into_plot_data(),
            axes: self,
            mask: None,
            color: None,
            alpha: None,
            label: None,
        }
    }

    /// Start a vertical reference line at `x`.
    pub fn axvline(&mut self, x: f64) -> VLineBuilder<'_> {
        VLineBuilder {
            line: VLine::new(x),
            axes: self,
            color: None,
        }
    }

    /// Attach a colorbar for the most recently added heatmap.
    pub fn colorbar(&mut self, label: impl Into<String>) -> PlotResult<&mut Self> {
        let (colormap, vmin, vmax) = self.last_mesh.ok_or_else(|| {
            PlotError::RenderError("colorbar requested on axes without a heatmap".to_string())
        })?;
        let mut bar = Colorbar::new(colormap, vmin, vmax).label(label, self.theme.label_style.clone());
        bar.ticks.tick_label_style = self.theme.tick_style.clone();
        bar.ticks.line_style.color = self.theme.axis_color.clone();
        self.colorbar = Some(bar);
        Ok(self)
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(Text::new(title, 0.0, 0.0).style(self.theme.title_style.clone()));
        self
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.x_label = Some(Text::new(label, 0.0, 0.0).style(self.theme.label_style.clone()));
        self
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.y_label = Some(Text::new(label, 0.0, 0.0).style(self.theme.label_style.clone()));
        self
    }

    /// Show the legend of labelled plots.
    pub fn legend(&mut self) -> &mut Self {
        self.legend.visible = true;
        self
    }

    /// Theme color for data drawn in black on a light background.
    pub fn foreground(&self) -> Color {
        self.theme.foreground.clone()
    }

    pub fn plots(&self) -> &[Box<dyn Plot>] {
        &self.plots
    }

    /// First plot with the given legend label.
    pub fn find_plot(&self, label: &str) -> Option<&dyn Plot> {
        self.plots
            .iter()
            .find(|p| p.label() == Some(label))
            .map(|p| p.as_ref())
    }

    pub fn title_text(&self) -> Option<&str> {
        self.title.as_ref().map(|t| t.content.as_str())
    }

    pub(crate) fn add_plot(&mut self, plot: Box<dyn Plot>) {
        if let Some(plot_bounds) = plot.bounds() {
            match self.data_bounds {
                Some(ref mut bounds) => bounds.include_bounds(&plot_bounds),
                None => self.data_bounds = Some(plot_bounds),
            }
        }
        if let Some(entry) = plot.legend_entry() {
            self.legend.add_entry(entry);
        }
        self.plots.push(plot);
    }

    pub(crate) fn next_color(&mut self) -> Color {
        let color = self.theme.cycle_color(self.color_index);
        self.color_index += 1;
        color
    }

    /// Visible data range: heatmaps are shown edge to edge, everything
    /// else gets 5% padding.
    fn view_bounds(&self) -> Bounds {
        let data = self.data_bounds.unwrap_or_default();
        let mut view = if self.last_mesh.is_some() { data } else { data.pad(0.05) };
        if view.width() == 0.0 {
            view.x_min -= 0.5;
            view.x_max += 0.5;
        }
        if view.height() == 0.0 {
            view.y_min -= 0.5;
            view.y_max += 0.5;
        }
        view
    }

    /// Render into a figure of the given pixel size.
    pub fn render_svg(&mut self, figure_width: f64, figure_height: f64) -> String {
        let mut pixel = Bounds::new(
            self.position.x_min * figure_width,
            self.position.x_max * figure_width,
            (1.0 - self.position.y_max) * figure_height,
            (1.0 - self.position.y_min) * figure_height,
        );
        if let Some(ref bar) = self.colorbar {
            pixel.x_max -= bar.reserved_width();
        }

        let view = self.view_bounds();
        self.x_scale.set_range(view.x_min, view.x_max);
        self.y_scale.set_range(view.y_min, view.y_max);

        let mut svg = format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>\n",
            pixel.x_min,
            pixel.y_min,
            pixel.width(),
            pixel.height(),
            self.theme.plot_background.to_svg_string()
        );

        if self.grid.visible {
            svg.push_str(&self.render_grid(&pixel));
        }

        let clip_id = format!("plot-clip-{}", self.id);
        svg.push_str(&format!(
            "<defs><clipPath id=\"{}\"><rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/></clipPath></defs>\n",
            clip_id,
            pixel.x_min,
            pixel.y_min,
            pixel.width(),
            pixel.height()
        ));
        svg.push_str(&format!("<g clip-path=\"url(#{})\">\n", clip_id));
        for plot in &self.plots {
            svg.push_str(&plot.render_svg(&view, &pixel));
        }
        svg.push_str("</g>\n");

        svg.push_str(&self.render_axes(&pixel));
        svg.push_str(&self.render_labels(&pixel));
        let points: Vec<(f64, f64)> = self
            .plots
            .iter()
            .filter_map(|p| p.xy())
            .flat_map(|(xs, ys)| xs.iter().zip(ys))
            .map(|(&x, &y)| (self.x_pixel(x, &pixel), self.y_pixel(y, &pixel)))
            .collect();
        svg.push_str(&self.legend.render_svg(&pixel, &points));

        if let Some(ref bar) = self.colorbar {
            svg.push_str(&bar.render_svg(&pixel, &format!("cbar-{}", self.id)));
        }
        svg
    }

    fn x_pixel(&self, value: f64, pixel: &Bounds) -> f64 {
        pixel.x_min + self.x_scale.transform(value) * pixel.width()
    }

    fn y_pixel(&self, value: f64, pixel: &Bounds) -> f64 {
        pixel.y_max - self.y_scale.transform(value) * pixel.height()
    }

    fn render_grid(&self, pixel: &Bounds) -> String {
        let style = self.grid.style.to_svg_style();
        let mut svg = String::new();
        for tick in self.x_scale.ticks(self.x_axis.num_ticks) {
            let px = self.x_pixel(tick, pixel);
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                px, pixel.y_min, px, pixel.y_max, style
            ));
        }
        for tick in self.y_scale.ticks(self.y_axis.num_ticks) {
            let py = self.y_pixel(tick, pixel);
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                pixel.x_min, py, pixel.x_max, py, style
            ));
        }
        svg
    }

    fn render_axes(&self, pixel: &Bounds) -> String {
        let mut svg = String::new();

        if self.x_axis.visible {
            let axis = &self.x_axis;
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                pixel.x_min,
                pixel.y_max,
                pixel.x_max,
                pixel.y_max,
                axis.line_style.to_svg_style()
            ));
            for tick in self.x_scale.ticks(axis.num_ticks) {
                let px = self.x_pixel(tick, pixel);
                svg.push_str(&format!(
                    "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                    px,
                    pixel.y_max,
                    px,
                    pixel.y_max + axis.tick_length,
                    axis.line_style.to_svg_style()
                ));
                svg.push_str(&format!(
                    "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" {}>{}</text>\n",
                    px,
                    pixel.y_max + axis.tick_length + axis.tick_padding + axis.tick_label_style.font_size,
                    axis.tick_label_style.to_svg_attrs(),
                    axis.format_tick(tick)
                ));
            }
        }

        if self.y_axis.visible {
            let axis = &self.y_axis;
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                pixel.x_min,
                pixel.y_min,
                pixel.x_min,
                pixel.y_max,
                axis.line_style.to_svg_style()
            ));
            for tick in self.y_scale.ticks(axis.num_ticks) {
                let py = self.y_pixel(tick, pixel);
                svg.push_str(&format!(
                    "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                    pixel.x_min - axis.tick_length,
                    py,
                    pixel.x_min,
                    py,
                    axis.line_style.to_svg_style()
                ));
                svg.push_str(&format!(
                    "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" dominant-baseline=\"middle\" {}>{}</text>\n",
                    pixel.x_min - axis.tick_length - axis.tick_padding,
                    py,
                    axis.tick_label_style.to_svg_attrs(),
                    axis.format_tick(tick)
                ));
            }
        }
        svg
    }

    fn render_labels(&self, pixel: &Bounds) -> String {
        let center_x = (pixel.x_min + pixel.x_max) / 2.0;
        let center_y = (pixel.y_min + pixel.y_max) / 2.0;
        let mut svg = String::new();

        if let Some(ref title) = self.title {
            let mut t = title.at(center_x, pixel.y_min - 12.0);
            t.style.anchor = TextAnchor::Middle;
            svg.push_str(&t.to_svg());
        }
        if let Some(ref label) = self.x_label {
            let mut t = label.at(center_x, pixel.y_max + 42.0);
            t.style.anchor = TextAnchor::Middle;
            svg.push_str(&t.to_svg());
        }
        if let Some(ref label) = self.y_label {
            let mut t = label.at(pixel.x_min - 50.0, center_y);
            t.style.anchor = TextAnchor::Middle;
            t.style.rotation = -90.0;
            svg.push_str(&t.to_svg());
        }
        svg
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for line plots.
pub struct LinePlotBuilder<'a> {
    axes: &'a mut Axes,
    plot: LinePlot,
    format: Option<String>,
    color: Option<Color>,
    alpha: Option<f64>,
}

impl<'a> LinePlotBuilder<'a> {
    /// matplotlib-style format string, e.g. `"r-"` or `"bo"`.
    pub fn format(mut self, fmt: impl Into<String>) -> Self {
        self.format = Some(fmt.into());
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn linewidth(mut self, width: f64) -> Self {
        self.plot = self.plot.linewidth(width);
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.plot = self.plot.label(label);
        self
    }

    pub fn build(self) -> &'a mut Axes {
        let LinePlotBuilder {
            axes,
            mut plot,
            format,
            color,
            alpha,
        } = self;

        let format_color = format.as_deref().and_then(|f| parse_format(f).color);
        if let Some(ref fmt) = format {
            plot = plot.format(fmt);
        }
        plot = match (color, format_color) {
            (Some(c), _) => plot.color(c),
            (None, Some(_)) => plot,
            (None, None) => plot.color(axes.next_color()),
        };
        if let Some(a) = alpha {
            plot = plot.alpha(a);
        }

        axes.add_plot(Box::new(plot));
        axes
    }
}

/// Builder for shaded regions.
pub struct FillBetweenBuilder<'a> {
    axes: &'a mut Axes,
    x: Vec<f64>,
    y1: Vec<f64>,
    y2: Vec<f64>,
    mask: Option<Vec<bool>>,
    color: Option<Color>,
    alpha: Option<f64>,
    label: Option<String>,
}

impl<'a> FillBetweenBuilder<'a> {
    /// Only shade where `mask` is true.
    pub fn where_mask(mut self, mask: Vec<bool>) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn build(self) -> PlotResult<&'a mut Axes> {
        let mut fill = FillBetween::new(self.x, self.y1, self.y2)?;
        if let Some(mask) = self.mask {
            fill = fill.mask(mask)?;
        }
        let color = self.color.unwrap_or_else(|| self.axes.next_color());
        fill = fill.color(color);
        if let Some(a) = self.alpha {
            fill = fill.alpha(a);
        }
        if let Some(label) = self.label {
            fill = fill.label(label);
        }
        self.axes.add_plot(Box::new(fill));
        Ok(self.axes)
    }
}

/// Builder for vertical reference lines.
pub struct VLineBuilder<'a> {
    axes: &'a mut Axes,
    line: VLine,
    color: Option<Color>,
}

impl<'a> VLineBuilder<'a> {
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn linestyle(mut self, dash: DashPattern) -> Self {
        self.line = self.line.linestyle(dash);
        self
    }

    pub fn linewidth(mut self, width: f64) -> Self {
        self.line = self.line.linewidth(width);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.line = self.line.label(label);
        self
    }

    pub fn build(self) -> &'a mut Axes {
        let color = self.color.unwrap_or_else(|| self.axes.next_color());
        self.axes.add_plot(Box::new(self.line.color(color)));
        self.axes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_builder_uses_color_cycle() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, 1.0], vec![0.0, 1.0]).label("a").build();
        ax.plot(vec![0.0, 1.0], vec![1.0, 0.0]).label("b").build();
        let a = ax.find_plot("a").and_then(|p| p.line_style()).unwrap();
        let b = ax.find_plot("b").and_then(|p| p.line_style()).unwrap();
        assert_eq!(a.color, ax.theme.cycle_color(0));
        assert_eq!(b.color, ax.theme.cycle_color(1));
    }

    #[test]
    fn test_format_color_does_not_advance_cycle() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, 1.0], vec![0.0, 1.0]).format("r-").label("red").build();
        ax.plot(vec![0.0, 1.0], vec![0.0, 1.0]).label("next").build();
        let red = ax.find_plot("red").and_then(|p| p.line_style()).unwrap();
        let next = ax.find_plot("next").and_then(|p| p.line_style()).unwrap();
        assert_eq!(red.color, Color::RED);
        assert_eq!(next.color, ax.theme.cycle_color(0));
    }

    #[test]
    fn test_labelled_plots_feed_legend() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, 1.0], vec![0.0, 1.0]).build();
        ax.axvline(0.5).label("ref").build();
        assert_eq!(ax.legend.entries.len(), 1);
        assert!(!ax.legend.visible);
        ax.legend();
        assert!(ax.legend.visible);
    }

    #[test]
    fn test_colorbar_requires_mesh() {
        let mut ax = Axes::new();
        assert!(matches!(ax.colorbar("p"), Err(PlotError::RenderError(_))));

        let values = array![[0.1, 0.2], [0.3, 0.4]];
        ax.pcolormesh(vec![0.0, 1.0], vec![0.0, 1.0], values.view(), Colormap::BluesR)
            .unwrap();
        ax.colorbar("Probability").unwrap();
        let bar = ax.colorbar.as_ref().unwrap();
        assert_eq!((bar.vmin, bar.vmax), (0.1, 0.4));
    }

    #[test]
    fn test_render_includes_title_labels_and_clip() {
        let mut ax = Axes::new();
        ax.id = 3;
        ax.plot(vec![0.0, 1.0], vec![0.0, 1.0]).format("o").build();
        ax.set_title("Data space").set_xlabel("x").set_ylabel("y");
        let svg = ax.render_svg(800.0, 600.0);
        assert!(svg.contains(">Data space</text>"));
        assert!(svg.contains("clipPath id=\"plot-clip-3\""));
        assert!(svg.contains("rotate(-90"));
    }
}
