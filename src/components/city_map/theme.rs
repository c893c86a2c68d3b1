//! Visual theming for the city map.
//!
//! Colors, radii, and layout constants bundled per theme.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color
	pub color: Color,
	/// Secondary color for gradients
	pub color_secondary: Color,
	/// Whether to use radial gradient
	pub use_gradient: bool,
}

/// Edge visual style.
#[derive(Clone, Debug)]
pub struct EdgeStyle {
	/// Edge stroke color
	pub color: Color,
	/// Stroke width in pixels
	pub line_width: f64,
}

/// Node visual style.
#[derive(Clone, Debug)]
pub struct NodeStyle {
	/// Fill color
	pub color: Color,
	/// Node disc radius in pixels
	pub radius: f64,
	/// Whether nodes have inner gradients
	pub use_gradient: bool,
}

/// Style of the office highlight drawn over the office node.
#[derive(Clone, Debug)]
pub struct OfficeStyle {
	/// Highlight fill color
	pub color: Color,
	/// Highlight disc radius in pixels; larger than the node radius so the
	/// overlay reads as a ring around the node.
	pub radius: f64,
}

/// Complete visual theme, including the layout constants that depend on it.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: BackgroundStyle,
	pub edge: EdgeStyle,
	pub node: NodeStyle,
	pub office: OfficeStyle,
	/// Hover hit-test threshold in pixels.
	pub hit_radius: f64,
	/// Space kept between the graph bounding box and the canvas border.
	pub fit_padding: f64,
}

impl Theme {
	/// Light theme matching the classic steelblue-on-paper look (default)
	pub fn daylight() -> Self {
		Self {
			name: "daylight",
			background: BackgroundStyle {
				color: Color::rgb(250, 250, 248),
				color_secondary: Color::rgb(255, 255, 255),
				use_gradient: false,
			},
			edge: EdgeStyle {
				color: Color::rgb(189, 195, 199),
				line_width: 1.0,
			},
			node: NodeStyle {
				color: Color::rgb(70, 130, 180),
				radius: 5.0,
				use_gradient: false,
			},
			office: OfficeStyle {
				color: Color::rgb(0, 0, 0),
				radius: 7.0,
			},
			hit_radius: 6.0,
			fit_padding: 40.0,
		}
	}

	/// Elegant dark theme with subtle gradients
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			background: BackgroundStyle {
				color: Color::rgb(18, 20, 28),
				color_secondary: Color::rgb(25, 28, 38),
				use_gradient: true,
			},
			edge: EdgeStyle {
				color: Color::rgba(100, 120, 150, 0.45),
				line_width: 1.5,
			},
			node: NodeStyle {
				color: Color::rgb(108, 142, 173),
				radius: 5.0,
				use_gradient: true,
			},
			office: OfficeStyle {
				color: Color::rgb(229, 192, 123),
				radius: 7.0,
			},
			hit_radius: 6.0,
			fit_padding: 40.0,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::daylight()
	}
}
