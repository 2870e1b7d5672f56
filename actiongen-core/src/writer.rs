const INDENT: &str = "    ";

/// Line oriented text output with the current indentation level.
///
/// Lines are right-trimmed as they are written, so blank lines never carry indentation.
#[derive(Debug, Default)]
pub struct CodeWriter {
    buffer: String,
    indent: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.trim_end().is_empty() {
            for _ in 0..self.indent {
                self.buffer.push_str(INDENT);
            }
        }
        self.buffer.push_str(text.trim_end());
        self.buffer.push('\n');
    }

    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    pub fn blank_line_if(&mut self, condition: bool) {
        if condition {
            self.blank_line();
        }
    }

    pub fn indented<R>(&mut self, body: impl FnOnce(&mut Self) -> R) -> R {
        self.indent += 1;
        let result = body(self);
        self.indent -= 1;
        result
    }

    /// `header`, then `body` indented between braces
    pub fn block<R>(&mut self, header: impl AsRef<str>, body: impl FnOnce(&mut Self) -> R) -> R {
        self.braced(header, "}", body)
    }

    /// Like [`CodeWriter::block`] but closed with `};`
    pub fn declaration<R>(
        &mut self,
        header: impl AsRef<str>,
        body: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.braced(header, "};", body)
    }

    fn braced<R>(
        &mut self,
        header: impl AsRef<str>,
        close: &str,
        body: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.line(header);
        self.line("{");
        let result = self.indented(body);
        self.line(close);
        result
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}
