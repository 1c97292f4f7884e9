use super::{Command, CommandId};

/// A committed command together with its id
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: CommandId,
    pub command: Command,
}

/// Manages the committed commands and the commands available for redo.
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// Commands currently on the canvas, oldest first
    undo_stack: Vec<Entry>,
    /// Undone commands; the last one is redone first
    redo_stack: Vec<Entry>,
    next_id: u64,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `command` and invalidates the redo stack.
    ///
    /// Previews are never committed; they return `None`.
    pub fn commit(&mut self, command: Command) -> Option<CommandId> {
        if command.is_preview() {
            log::warn!("Refusing to commit transient {}", command.label());
            return None;
        }

        let id = CommandId(self.next_id);
        self.next_id += 1;
        log::info!("Committed {} {:?}", command.label(), id);
        self.undo_stack.push(Entry { id, command });
        self.redo_stack.clear();
        Some(id)
    }

    /// Moves the newest command to the redo stack. Does nothing when empty.
    pub fn undo(&mut self) -> Option<&Command> {
        let entry = self.undo_stack.pop()?;
        log::info!("Undo {} {:?}", entry.command.label(), entry.id);
        self.redo_stack.push(entry);
        self.redo_stack.last().map(|entry| &entry.command)
    }

    /// Moves the most recently undone command back. Does nothing when empty.
    pub fn redo(&mut self) -> Option<&Command> {
        let entry = self.redo_stack.pop()?;
        log::info!("Redo {} {:?}", entry.command.label(), entry.id);
        self.undo_stack.push(entry);
        self.undo_stack.last().map(|entry| &entry.command)
    }

    /// Empties both stacks
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn clear_redo(&mut self) {
        self.redo_stack.clear();
    }

    /// A committed command by id. Undone commands are not reachable.
    pub fn get_mut(&mut self, id: CommandId) -> Option<&mut Command> {
        self.undo_stack
            .iter_mut()
            .rev()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.command)
    }

    /// Committed commands in paint order
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.undo_stack.iter().map(|entry| &entry.command)
    }

    pub fn undo_stack(&self) -> &[Entry] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Entry] {
        &self.redo_stack
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Stroke, ToolPreview};
    use egui::{Color32, pos2};

    fn stroke(x: f32) -> Command {
        Command::Stroke(Stroke::new(pos2(x, x), 2.0, Color32::BLACK))
    }

    #[test]
    fn test_previews_are_not_committed() {
        let mut history = CommandHistory::new();
        let preview = ToolPreview::new(pos2(0.0, 0.0), 2.0, 2.0, Color32::BLACK);
        assert_eq!(history.commit(Command::ToolPreview(preview)), None);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_ids_are_unique_across_undo() {
        let mut history = CommandHistory::new();
        let first = history.commit(stroke(1.0)).unwrap();
        history.undo();
        let second = history.commit(stroke(2.0)).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_undone_command_is_not_mutable() {
        let mut history = CommandHistory::new();
        let id = history.commit(stroke(1.0)).unwrap();
        assert!(history.get_mut(id).is_some());
        history.undo();
        assert!(history.get_mut(id).is_none());
    }
}
