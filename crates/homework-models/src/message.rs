//! Notification text for a homework record.

use crate::error::UnknownStatusError;
use crate::homework::HomeworkRecord;
use crate::status::{HomeworkStatus, NO_NEW_STATUSES};

impl HomeworkRecord {
    /// Formats the notification for this record.
    ///
    /// The "no new statuses" sentinel is returned verbatim. Any other status
    /// outside [`HomeworkStatus`] is an error.
    pub fn status_message(&self) -> Result<String, UnknownStatusError> {
        if self.status == NO_NEW_STATUSES {
            return Ok(NO_NEW_STATUSES.to_string());
        }

        let status: HomeworkStatus = self.status.parse()?;

        let mut message = format!("Изменился статус проверки работы \"{}\"", self.name);
        if !self.lesson_name.is_empty() {
            message.push_str(&format!(" для урока \"{}\"", self.lesson_name));
        }
        message.push_str(": ");
        message.push_str(status.verdict());
        if !self.reviewer_comment.is_empty() {
            message.push_str(&format!("\nКомментарий ревьюера: {}", self.reviewer_comment));
        }

        Ok(message)
    }
}
