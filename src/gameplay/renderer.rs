use super::snapshot::Snapshot;

/// Presentation layer, handed a fresh snapshot after every input.
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot);
}

impl<F> Renderer for F
where
    F: FnMut(&Snapshot),
{
    fn render(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}
