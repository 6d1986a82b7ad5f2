//! The fixed text of the seeded documents.

/// One unit of document content, rendered top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Document heading.
    Title(&'static str),
    /// Section heading.
    Heading(&'static str),
    /// A single body line.
    Line(&'static str),
    /// Body lines rendered with an indent.
    Items(&'static [&'static str]),
    /// Vertical space between sections.
    Gap,
}

/// A document written to the upload directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedDocument {
    pub file_name: &'static str,
    pub blocks: &'static [Block],
}

/// Prefix for list items.
pub const ITEM_INDENT: &str = "  ";

impl SeedDocument {
    /// The first `Title` block, used for the PDF info dictionary.
    pub fn title(&self) -> Option<&'static str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Title(text) => Some(*text),
            _ => None,
        })
    }

    /// Every line of text exactly as it is drawn, in order.
    pub fn text_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for block in self.blocks {
            match block {
                Block::Title(text) | Block::Heading(text) | Block::Line(text) => {
                    lines.push((*text).to_string())
                }
                Block::Items(items) => {
                    lines.extend(items.iter().map(|item| format!("{ITEM_INDENT}{item}")))
                }
                Block::Gap => {}
            }
        }
        lines
    }
}

pub const IPV4: SeedDocument = SeedDocument {
    file_name: "ipv4.pdf",
    blocks: &[
        Block::Title("IPv4 Addressing and Subnetting"),
        Block::Line("IPv4 is the fourth version of the Internet Protocol."),
        Block::Line("IPv4 addresses are 32-bit numbers written in four decimal numbers."),
        Block::Line("Example: 192.168.1.1"),
        Block::Gap,
        Block::Heading("Classful Addressing:"),
        Block::Items(&[
            "Class A: 1.0.0.0 to 126.255.255.255",
            "Class B: 128.0.0.0 to 191.255.255.255",
            "Class C: 192.0.0.0 to 223.255.255.255",
            "Class D: 224.0.0.0 to 239.255.255.255",
            "Class E: 240.0.0.0 to 255.255.255.255",
        ]),
        Block::Gap,
        Block::Heading("Subnetting:"),
        Block::Line("Subnetting allows dividing an IP address space into multiple networks."),
        Block::Line("The subnet mask determines the network and host portions."),
        Block::Gap,
        Block::Heading("Default Subnet Masks:"),
        Block::Items(&[
            "Class A: 255.0.0.0",
            "Class B: 255.255.0.0",
            "Class C: 255.255.255.0",
        ]),
    ],
};

pub const EJEMPLO: SeedDocument = SeedDocument {
    file_name: "ejemplo.pdf",
    blocks: &[
        Block::Title("Example Document for Testing"),
        Block::Line("This is an example document for testing the cloud analysis system."),
        Block::Gap,
        Block::Heading("Key Concepts:"),
        Block::Items(&[
            "1. Documentation is important for understanding systems",
            "2. Examples help illustrate and clarify complex concepts",
            "3. Testing ensures quality and reliability",
            "4. Cloud systems provide scalability",
        ]),
        Block::Gap,
        Block::Heading("Summary:"),
        Block::Line("Testing with valid PDFs ensures the pipeline works correctly."),
        Block::Line("This example demonstrates proper document handling."),
    ],
};

/// All seeded documents, in the order they are written.
pub fn all() -> [&'static SeedDocument; 2] {
    [&IPV4, &EJEMPLO]
}
