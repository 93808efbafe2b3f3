//! Message update handlers - thin dispatcher delegating to submodules

mod control;
mod gallery;
mod navigation;
mod remote;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_gallery(&message) {
            return task;
        }
        if let Some(task) = self.handle_control(&message) {
            return task;
        }
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
