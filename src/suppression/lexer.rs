//! Line lexer separating code from comments
//!
//! Tracks string literals (`'…'` with `''` escapes) and block comments
//! across lines, so comment openers inside a string are not comments and
//! quotes inside a comment are not strings.

/// One line split into code and comment text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexedLine {
    /// The line with comments and string literals blanked to spaces,
    /// same length in characters as the original
    pub code: String,
    /// Body of every comment on this line, delimiters removed
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    String,
    BlockComment,
}

/// Lex every line, carrying block comment and string state across lines
pub fn lex_lines<S: AsRef<str>>(lines: &[S]) -> Vec<LexedLine> {
    let mut state = State::Code;
    let mut result = Vec::with_capacity(lines.len());

    for line in lines {
        let chars: Vec<char> = line.as_ref().chars().collect();
        let mut lexed = LexedLine {
            code: String::with_capacity(chars.len()),
            comments: Vec::new(),
        };
        // A block comment carried over from the previous line starts its body at column 0
        let mut comment = (state == State::BlockComment).then(String::new);
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();

            match state {
                State::BlockComment => {
                    if c == '*' && next == Some('/') {
                        state = State::Code;
                        lexed.comments.extend(comment.take());
                        lexed.code.push_str("  ");
                        i += 2;
                        continue;
                    }
                    if let Some(body) = comment.as_mut() {
                        body.push(c);
                    }
                    lexed.code.push(' ');
                }
                State::String => {
                    if c == '\'' {
                        if next == Some('\'') {
                            lexed.code.push_str("  ");
                            i += 2;
                            continue;
                        }
                        state = State::Code;
                    }
                    lexed.code.push(' ');
                }
                State::Code => {
                    if c == '-' && next == Some('-') {
                        lexed.comments.push(chars[i + 2..].iter().collect());
                        lexed.code.extend(std::iter::repeat(' ').take(chars.len() - i));
                        break;
                    } else if c == '/' && next == Some('*') {
                        state = State::BlockComment;
                        comment = Some(String::new());
                        lexed.code.push_str("  ");
                        i += 2;
                        continue;
                    } else if c == '\'' {
                        state = State::String;
                        lexed.code.push(' ');
                    } else {
                        lexed.code.push(c);
                    }
                }
            }
            i += 1;
        }

        // Unterminated block comment: this line's part is still a comment
        lexed.comments.extend(comment.take());
        result.push(lexed);
    }
    result
}
