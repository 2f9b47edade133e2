use crate::commands::{als::Als, cnt::Cnt, eml::Eml, lst::Lst, rem::Rem, sav::Sav};
use crate::process_command::process_command;
use contact_directory::DirectoryHandle;
use log::{trace, warn};
use std::error;
use tokio::io::{AsyncWrite, AsyncWriteExt};

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    directory: DirectoryHandle,
}

impl Shell {
    pub fn new(directory: DirectoryHandle) -> Self {
        Shell { directory }
    }

    pub async fn handle_line(
        &self,
        wr: &mut (impl AsyncWrite + Unpin),
        line: &str,
    ) -> Result<Flow, Box<dyn error::Error + Send + Sync>> {
        let message = line.trim();
        if message.is_empty() {
            return Ok(Flow::Continue);
        }

        trace!("C: {message}");
        let args: Vec<&str> = message.split(' ').collect();

        match args[0] {
            "ALS" => process_command(wr, &Als::new(self.directory.clone()), message).await?,
            "REM" => process_command(wr, &Rem::new(self.directory.clone()), message).await?,
            "LST" => process_command(wr, &Lst::new(self.directory.clone()), message).await?,
            "CNT" => process_command(wr, &Cnt::new(self.directory.clone()), message).await?,
            "EML" => process_command(wr, &Eml::new(self.directory.clone()), message).await?,
            "SAV" => process_command(wr, &Sav::new(self.directory.clone()), message).await?,
            "OUT" => return Ok(Flow::Quit),
            _ => {
                let tr_id = args.get(1).unwrap_or(&"0");
                let reply = format!("200 {tr_id}\r\n");
                wr.write_all(reply.as_bytes()).await?;
                wr.flush().await?;
                warn!("S: {reply}");
                vec![]
            }
        };

        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::{Flow, Shell};
    use contact_directory::{ContactDirectory, DirectoryHandle};
    use std::fs;
    use tempfile::tempdir;

    async fn run(shell: &Shell, lines: &[&str]) -> (String, Flow) {
        let mut output = Vec::new();
        let mut flow = Flow::Continue;

        for line in lines {
            flow = shell.handle_line(&mut output, line).await.unwrap();
            if flow == Flow::Quit {
                break;
            }
        }

        (String::from_utf8(output).unwrap(), flow)
    }

    #[tokio::test]
    async fn session_updates_and_saves() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.txt");
        let shell = Shell::new(DirectoryHandle::spawn(ContactDirectory::new(), &path));

        let (output, flow) = run(
            &shell,
            &[
                "ALS 1 jim jim@example.com",
                "ALS 2 - jane@example.com",
                "",
                "CNT 3 jim",
                "CNT 4 jane",
                "XYZ 5",
                "SAV 6",
                "OUT",
                "REM 7 jim@example.com",
            ],
        )
        .await;

        assert_eq!(
            output,
            "ALS 1 jim jim@example.com\r\n\
             ALS 2 - jane@example.com\r\n\
             CNT 3 jim jim@example.com\r\n\
             208 4\r\n\
             200 5\r\n\
             SAV 6 2\r\n"
        );
        assert_eq!(flow, Flow::Quit);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            ": jane@example.com: \njim: jim@example.com: \n"
        );
    }
}
