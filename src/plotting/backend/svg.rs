//! SVG document assembly.

/// Collects SVG fragments and wraps them in a document.
#[derive(Debug)]
pub struct SvgBackend {
    pub width: f64,
    pub height: f64,
    content: Vec<String>,
    include_declaration: bool,
}

impl SvgBackend {
    pub fn new(width: f64, height: f64) -> Self {
        SvgBackend {
            width,
            height,
            content: Vec::new(),
            include_declaration: true,
        }
    }

    /// Whether to emit the `<?xml ...?>` declaration.
    pub fn include_declaration(mut self, include: bool) -> Self {
        self.include_declaration = include;
        self
    }

    pub fn add_content(&mut self, content: String) {
        self.content.push(content);
    }

    pub fn render(self) -> String {
        let declaration = if self.include_declaration {
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"
        } else {
            ""
        };
        format!(
            "{}<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n{}\n</svg>\n",
            declaration,
            self.width,
            self.height,
            self.width,
            self.height,
            self.content.join("\n")
        )
    }
}
