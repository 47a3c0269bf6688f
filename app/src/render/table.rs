use std::fmt;

/// Content of one body cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Text(String),
    Link { href: String, text: String },
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(text) => write!(f, "{}", Escaped(text)),
            Cell::Link { href, text } => {
                write!(f, "<a href=\"{}\">{}</a>", Escaped(href), Escaped(text))
            }
        }
    }
}

/// The rendering surface: a table with an optional header row and a body.
///
/// Every render replaces the whole content, so the markup depends only on
/// the last render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    id: String,
    head: Option<Vec<String>>,
    body: Vec<Vec<Cell>>,
}

impl ResultTable {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            head: None,
            body: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn head(&self) -> Option<&[String]> {
        self.head.as_deref()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.body
    }

    pub fn clear(&mut self) {
        self.head = None;
        self.body.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none() && self.body.is_empty()
    }

    pub(crate) fn replace(&mut self, head: Vec<String>, body: Vec<Vec<Cell>>) {
        self.head = Some(head);
        self.body = body;
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<table id=\"{}\">", Escaped(&self.id))?;

        if let Some(head) = &self.head {
            f.write_str("<thead><tr>")?;
            for column in head {
                write!(f, "<th>{}</th>", Escaped(column))?;
            }
            f.write_str("</tr></thead><tbody>")?;
            for row in &self.body {
                f.write_str("<tr>")?;
                for cell in row {
                    write!(f, "<td>{cell}</td>")?;
                }
                f.write_str("</tr>")?;
            }
            f.write_str("</tbody>")?;
        }

        f.write_str("</table>")
    }
}

/// HTML-escapes text and attribute values on display.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(pos) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..pos])?;
            let entity = match rest.as_bytes()[pos] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            };
            f.write_str(entity)?;
            rest = &rest[pos + 1..];
        }
        f.write_str(rest)
    }
}
