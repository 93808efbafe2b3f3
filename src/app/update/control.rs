//! Control bar message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle playback control messages
    pub fn handle_control(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::CycleDelayLoaded(result) => {
                self.control.cycle_delay_loaded(result.clone());
                Some(Task::none())
            }

            Message::TogglePlayback => {
                let request = self.control.toggle_playing();
                Some(self.run_request(request))
            }

            Message::CycleDelayInputChanged(text) => {
                self.control.edit_delay_input(text.clone());
                Some(Task::none())
            }

            Message::CycleDelaySubmitted => {
                let request = self.control.submit_delay_input();
                Some(self.run_optional(request))
            }

            Message::CycleDelayWritten(result) => {
                self.control.write_finished(result.clone());
                Some(Task::none())
            }

            Message::NextAnimation => Some(self.run_request(self.control.next())),

            Message::PrevAnimation => Some(self.run_request(self.control.prev())),

            Message::PlaybackActionFinished(result) => {
                self.control.action_finished(result.clone());
                Some(Task::none())
            }

            _ => None,
        }
    }
}
