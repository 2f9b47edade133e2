use crate::commands::traits::command::Command;
use crate::errors::command_error::CommandError;
use log::{trace, warn};
use std::error;
use tokio::io::{AsyncWrite, AsyncWriteExt};

pub async fn process_command(
    wr: &mut (impl AsyncWrite + Unpin),
    command: &impl Command,
    message: &str,
) -> Result<Vec<String>, Box<dyn error::Error + Send + Sync>> {
    match command.handle(message).await {
        Ok(responses) => {
            for reply in &responses {
                wr.write_all(reply.as_bytes()).await?;
                trace!("S: {reply}");
            }

            wr.flush().await?;
            Ok(responses)
        }

        Err(CommandError::Reply(err)) => {
            wr.write_all(err.as_bytes()).await?;
            wr.flush().await?;
            warn!("S: {err}");
            Ok(vec![])
        }

        Err(err) => Err(err.into()),
    }
}
