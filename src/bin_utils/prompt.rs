use std::io::{self, BufRead, Write};

/// Writes `label` and reads one line of answer, without its line ending.
/// `None` once the input is exhausted.
pub fn ask<R, W>(input: &mut R, output: &mut W, label: &str) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{label} ")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}

/// Only an explicit `y`/`yes` counts as agreement.
pub fn confirm<R, W>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    let answer = ask(input, output, &format!("{question} (y/n)"))?;
    Ok(answer.is_some_and(|answer| {
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_reads_lines_until_eof() {
        let mut input = "first\r\n  second  \n".as_bytes();
        let mut output = Vec::new();
        assert_eq!(
            ask(&mut input, &mut output, "Name:").unwrap().as_deref(),
            Some("first")
        );
        assert_eq!(
            ask(&mut input, &mut output, "Name:").unwrap().as_deref(),
            Some("  second  ")
        );
        assert_eq!(ask(&mut input, &mut output, "Name:").unwrap(), None);
        assert_eq!(String::from_utf8(output).unwrap(), "Name: Name: Name: ");
    }

    #[test]
    fn confirm_answers() {
        let mut output = Vec::new();
        assert!(confirm(&mut "Yes\n".as_bytes(), &mut output, "Sure?").unwrap());
        assert!(confirm(&mut "y\n".as_bytes(), &mut output, "Sure?").unwrap());
        assert!(!confirm(&mut "nope\n".as_bytes(), &mut output, "Sure?").unwrap());
        assert!(!confirm(&mut "".as_bytes(), &mut output, "Sure?").unwrap());
    }
}
