//! Lenient markup tokenizer.
//!
//! Never fails: anything that cannot be read as a tag is emitted as text.
//! Slices are always cut at ASCII delimiters, so they stay valid UTF-8.

use memchr::memchr;

/// Elements whose content is read verbatim up to the matching end tag.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// A lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Opening tag
    StartTag {
        name: String,
        attrs: Vec<(String, String)>,
        self_closing: bool,
    },
    /// Closing tag
    EndTag { name: String },
    /// Character data, undecoded
    Text(&'a str),
    /// `<!--...-->` body
    Comment(&'a str),
    /// `<!...>` body including the leading `!`
    Directive(&'a str),
    /// `<?...>` body including the leading `?`
    ProcessingInstruction(&'a str),
    /// `<![CDATA[...]]>` body
    CData(&'a str),
}

/// Iterator over the tokens of a markup string.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    lowercase: bool,
    xml_mode: bool,
    raw_text_end: Option<String>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer.
    pub fn new(input: &'a str, lowercase: bool, xml_mode: bool) -> Self {
        Self {
            input,
            pos: 0,
            lowercase,
            xml_mode,
            raw_text_end: None,
        }
    }

    fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    fn normalize_name(&self, name: &str) -> String {
        if self.lowercase {
            name.to_ascii_lowercase()
        } else {
            name.to_string()
        }
    }

    /// Whether a `<` at `at` opens markup rather than being literal text.
    fn is_tag_start(&self, at: usize) -> bool {
        match self.bytes().get(at + 1) {
            Some(b) if b.is_ascii_alphabetic() => true,
            Some(b'!') | Some(b'?') => true,
            Some(b'/') => self
                .bytes()
                .get(at + 2)
                .is_some_and(|b| b.is_ascii_alphabetic()),
            _ => false,
        }
    }

    /// Find the next tag start at or after `from`.
    fn next_tag_start(&self, from: usize) -> Option<usize> {
        let mut search = from;
        while let Some(offset) = memchr(b'<', &self.bytes()[search..]) {
            let at = search + offset;
            if self.is_tag_start(at) {
                return Some(at);
            }
            search = at + 1;
        }
        None
    }

    fn text_until_next_tag(&mut self, from: usize) -> Token<'a> {
        let start = self.pos;
        let end = self.next_tag_start(from).unwrap_or(self.input.len());
        self.pos = end;
        Token::Text(&self.input[start..end])
    }

    /// Find `needle` at or after `from`, returning its start.
    fn find_from(&self, from: usize, needle: &str) -> Option<usize> {
        self.input[from..].find(needle).map(|i| from + i)
    }

    /// Find `</name` case-insensitively at or after `from`.
    fn find_end_tag(&self, from: usize, name: &str) -> Option<usize> {
        let bytes = self.bytes();
        let mut search = from;
        while let Some(offset) = memchr(b'<', &bytes[search..]) {
            let at = search + offset;
            let candidate = &bytes[at + 1..];
            if candidate.first() == Some(&b'/')
                && candidate.len() > name.len()
                && candidate[1..=name.len()].eq_ignore_ascii_case(name.as_bytes())
            {
                return Some(at);
            }
            search = at + 1;
        }
        None
    }

    fn read_raw_text(&mut self, name: &str) -> Option<Token<'a>> {
        let start = self.pos;
        let end = self.find_end_tag(start, name).unwrap_or(self.input.len());
        if end == start {
            return None;
        }
        self.pos = end;
        Some(Token::Text(&self.input[start..end]))
    }

    fn read_delimited(&mut self, open_len: usize, close: &str) -> &'a str {
        let body_start = self.pos + open_len;
        match self.find_from(body_start, close) {
            Some(end) => {
                self.pos = end + close.len();
                &self.input[body_start..end]
            }
            None => {
                self.pos = self.input.len();
                &self.input[body_start.min(self.input.len())..]
            }
        }
    }

    fn read_until_gt(&mut self) -> &'a str {
        let body_start = self.pos + 1;
        match memchr(b'>', &self.bytes()[body_start..]) {
            Some(offset) => {
                self.pos = body_start + offset + 1;
                &self.input[body_start..body_start + offset]
            }
            None => {
                self.pos = self.input.len();
                &self.input[body_start..]
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while self
            .bytes()
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
    }

    fn read_name(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(&b) = self.bytes().get(self.pos) {
            if b.is_ascii_whitespace() || matches!(b, b'>' | b'/' | b'=') {
                break;
            }
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    fn read_attribute_value(&mut self) -> &'a str {
        match self.bytes().get(self.pos) {
            Some(&quote) if quote == b'"' || quote == b'\'' => {
                let start = self.pos + 1;
                match memchr(quote, &self.bytes()[start..]) {
                    Some(offset) => {
                        self.pos = start + offset + 1;
                        &self.input[start..start + offset]
                    }
                    None => {
                        self.pos = self.input.len();
                        &self.input[start..]
                    }
                }
            }
            _ => {
                let start = self.pos;
                while let Some(&b) = self.bytes().get(self.pos) {
                    if b.is_ascii_whitespace() || b == b'>' {
                        break;
                    }
                    self.pos += 1;
                }
                &self.input[start..self.pos]
            }
        }
    }

    fn read_end_tag(&mut self) -> Token<'a> {
        let tag_start = self.pos;
        self.pos += 2;
        let name = self.read_name();
        match memchr(b'>', &self.bytes()[self.pos..]) {
            Some(offset) => {
                self.pos += offset + 1;
                Token::EndTag {
                    name: self.normalize_name(name),
                }
            }
            None => {
                self.pos = self.input.len();
                Token::Text(&self.input[tag_start..])
            }
        }
    }

    fn read_start_tag(&mut self) -> Token<'a> {
        let tag_start = self.pos;
        self.pos += 1;
        let raw = self.read_name();
        let name = self.normalize_name(raw);
        let mut attrs = Vec::new();
        let mut self_closing = false;

        loop {
            self.skip_whitespace();
            match self.bytes().get(self.pos) {
                None => {
                    // Unterminated tag: give the rest back as text
                    self.pos = self.input.len();
                    return Token::Text(&self.input[tag_start..]);
                }
                Some(b'>') => {
                    self.pos += 1;
                    break;
                }
                Some(b'/') => {
                    self.pos += 1;
                    if self.bytes().get(self.pos) == Some(&b'>') {
                        self.pos += 1;
                        self_closing = true;
                        break;
                    }
                }
                Some(b'=') => {
                    // Stray `=` with no name
                    self.pos += 1;
                    self.skip_whitespace();
                    self.read_attribute_value();
                }
                Some(_) => {
                    let raw = self.read_name();
                    let attr_name = self.normalize_name(raw);
                    self.skip_whitespace();
                    let value = if self.bytes().get(self.pos) == Some(&b'=') {
                        self.pos += 1;
                        self.skip_whitespace();
                        self.read_attribute_value()
                    } else {
                        ""
                    };
                    attrs.push((attr_name, value.to_string()));
                }
            }
        }

        if !self.xml_mode && !self_closing && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
            self.raw_text_end = Some(name.clone());
        }

        Token::StartTag {
            name,
            attrs,
            self_closing,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if let Some(name) = self.raw_text_end.take() {
            if let Some(text) = self.read_raw_text(&name) {
                return Some(text);
            }
        }

        if self.pos >= self.input.len() {
            return None;
        }

        let rest = &self.input[self.pos..];
        if !rest.starts_with('<') || !self.is_tag_start(self.pos) {
            let from = self.pos + 1;
            return Some(self.text_until_next_tag(from));
        }

        let token = if rest.starts_with("<!--") {
            Token::Comment(self.read_delimited(4, "-->"))
        } else if rest.starts_with("<![CDATA[") {
            Token::CData(self.read_delimited(9, "]]>"))
        } else if rest.starts_with("<!") {
            Token::Directive(self.read_until_gt())
        } else if rest.starts_with("<?") {
            Token::ProcessingInstruction(self.read_until_gt())
        } else if rest.starts_with("</") {
            self.read_end_tag()
        } else {
            self.read_start_tag()
        };
        Some(token)
    }
}
