/// A preamble fixture and the parser stage it exercises.
#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    kind: PreambleKind,
    file: TestFile,
}

impl TestCase {
    pub fn new(name: &'static str, kind: PreambleKind, file: TestFile) -> Self {
        Self { name, kind, file }
    }

    pub fn request(name: &'static str, file: TestFile) -> Self {
        Self::new(name, PreambleKind::Request, file)
    }

    pub fn response(name: &'static str, file: TestFile) -> Self {
        Self::new(name, PreambleKind::Response, file)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> PreambleKind {
        self.kind
    }

    pub fn file(&self) -> &TestFile {
        &self.file
    }

    pub fn file_name(&self) -> &'static str {
        self.file().file_name
    }
}

#[derive(Debug, Copy, Clone)]
pub struct TestFile {
    file_name: &'static str,
    content: &'static str,
}

impl TestFile {
    pub const fn new(file_name: &'static str, content: &'static str) -> Self {
        Self { file_name, content }
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreambleKind {
    Request,
    Response,
}
