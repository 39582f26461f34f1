use chumsky::prelude::*;

/// A `:name` command prefix at the start of a line.
pub fn command(name: &'static str) -> impl Parser<char, (), Error = Simple<char>> + Clone {
    just(':').ignore_then(text::keyword(name))
}

/// A bare word that makes up the whole line, surrounding whitespace aside.
pub fn word(name: &'static str) -> impl Parser<char, (), Error = Simple<char>> + Clone {
    text::keyword(name).padded().then_ignore(end())
}

/// Everything left on the line, verbatim.
pub fn rest() -> impl Parser<char, String, Error = Simple<char>> + Clone {
    any().repeated().collect::<String>()
}

/// A line holding nothing but whitespace.
pub fn blank() -> impl Parser<char, (), Error = Simple<char>> + Clone {
    text::whitespace().then_ignore(end()).to(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_requires_colon_and_exact_name() {
        assert!(command("ast").parse(":ast").is_ok());
        assert!(command("ast").then_ignore(end()).parse(":astx").is_err());
        assert!(command("ast").parse("ast").is_err());
    }

    #[test]
    fn word_allows_padding_only() {
        assert!(word("quit").parse("  quit ").is_ok());
        assert!(word("quit").parse("quit now").is_err());
        assert!(word("quit").parse("quitter").is_err());
    }

    #[test]
    fn rest_takes_remaining_text() {
        let parser = command("eval").ignore_then(rest());
        assert_eq!(parser.parse(":eval 1 + 2"), Ok(" 1 + 2".to_string()));
        assert_eq!(parser.parse(":eval"), Ok(String::new()));
    }

    #[test]
    fn blank_matches_whitespace_lines() {
        assert!(blank().parse("").is_ok());
        assert!(blank().parse(" \t ").is_ok());
        assert!(blank().parse(" 1 ").is_err());
    }
}
