/// One presentational unit of game output. Styling is decided by the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    Rule,
    Blank,
    Title { name: String, desc: Option<String> },
    Heading(String),
    Entry(String),
    Text(String),
    Error(String),
    Success(String),
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn rule(&mut self) {
        self.blocks.push(OutputBlock::Rule);
    }

    pub fn blank(&mut self) {
        self.blocks.push(OutputBlock::Blank);
    }

    pub fn title(&mut self, name: impl Into<String>, desc: &str) {
        let desc = desc.trim();
        self.blocks.push(OutputBlock::Title {
            name: name.into(),
            desc: (!desc.is_empty()).then(|| desc.to_string()),
        });
    }

    pub fn heading(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Heading(s.into()));
    }

    pub fn entry(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Entry(s.into()));
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn error(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Error(s.into()));
    }

    pub fn success(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Success(s.into()));
    }
}
