use crate::errors::command_error::CommandError;

pub trait Command {
    async fn handle(&self, command: &str) -> Result<Vec<String>, CommandError>;
}
