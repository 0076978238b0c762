/// Builds droid markdown with just the pieces a test cares about.
pub struct DroidBuilder {
    id: String,
    frontmatter: bool,
    sections: Vec<(String, String)>,
    padding: usize,
}

impl DroidBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            frontmatter: true,
            sections: Vec::new(),
            padding: 0,
        }
    }

    pub fn without_frontmatter(mut self) -> Self {
        self.frontmatter = false;
        self
    }

    pub fn section(mut self, heading: &str, body: &str) -> Self {
        self.sections.push((heading.to_string(), body.to_string()));
        self
    }

    /// Append filler text so the document clears length checks.
    pub fn padded(mut self, chars: usize) -> Self {
        self.padding = chars;
        self
    }

    pub fn build(self) -> String {
        let mut out = String::new();
        if self.frontmatter {
            out.push_str(&format!("---\nid: {}\ncategory: advanced\n---\n\n", self.id));
        }
        out.push_str(&format!("# {}\n\n", self.id));
        for (heading, body) in &self.sections {
            out.push_str(&format!("{}\n\n{}\n\n", heading, body));
        }
        out.push_str(&"x".repeat(self.padding));
        out.push('\n');
        out
    }
}
