use std::io::{self, BufRead, Write};

use nix::unistd::getcwd;

pub struct ShellPrompt {
    suffix: String,
}

impl ShellPrompt {
    pub fn new(suffix: &str) -> Self {
        ShellPrompt {
            suffix: suffix.to_string(),
        }
    }

    /// `<cwd><suffix>`, e.g. `/home/me$ `. Falls back to the bare suffix if
    /// the working directory is gone.
    pub fn render(&self) -> String {
        match getcwd() {
            Ok(cwd) => format!("{}{}", cwd.display(), self.suffix),
            Err(_) => self.suffix.clone(),
        }
    }

    pub fn show_prompt<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.render())?;
        out.flush()
    }

    /// Reads one line as raw bytes, without its line ending. `None` on EOF.
    pub fn read_line<R: BufRead>(&self, input: &mut R) -> io::Result<Option<Vec<u8>>> {
        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }
}
