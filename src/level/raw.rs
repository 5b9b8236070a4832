//! Level Descriptor Loader (§4.A).
//!
//! Tokenizes a `.cub` byte stream into six header directives and a grid of
//! row strings, with no interpretation of cell semantics — that is the
//! Validator's job (§4.B). Unlike the original C parser, which tracked "how
//! many directives parsed" in module-level static state, this is an explicit
//! two-pass scan held on a [`Parser`] instance: collect directives first,
//! then consume grid rows (Design Note: "stateful accumulator in the
//! parser").

use std::io::{BufRead, Read};

use super::error::LevelParseError;

/// Tuple output of the loader: four texture paths, ceiling/floor RGB, and
/// the raw (unpadded, unvalidated) grid rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDescriptor {
    pub tex_no: Option<String>,
    pub tex_so: Option<String>,
    pub tex_we: Option<String>,
    pub tex_ea: Option<String>,
    pub ceiling: Option<[u8; 3]>,
    pub floor: Option<[u8; 3]>,
    pub rows: Vec<String>,
}

const DIRECTIVES: [&str; 6] = ["NO", "SO", "WE", "EA", "F", "C"];

struct Parser {
    tex_no: Option<String>,
    tex_so: Option<String>,
    tex_we: Option<String>,
    tex_ea: Option<String>,
    ceiling: Option<[u8; 3]>,
    floor: Option<[u8; 3]>,
    rows: Vec<String>,
    grid_started: bool,
    grid_ended: bool,
}

impl Parser {
    fn new() -> Self {
        Self {
            tex_no: None,
            tex_so: None,
            tex_we: None,
            tex_ea: None,
            ceiling: None,
            floor: None,
            rows: Vec::new(),
            grid_started: false,
            grid_ended: false,
        }
    }

    fn all_directives_seen(&self) -> bool {
        self.tex_no.is_some()
            && self.tex_so.is_some()
            && self.tex_we.is_some()
            && self.tex_ea.is_some()
            && self.ceiling.is_some()
            && self.floor.is_some()
    }

    fn is_grid_line(line: &str) -> bool {
        matches!(line.chars().next(), Some('0') | Some('1') | Some(' '))
    }

    fn feed_line(&mut self, line_no: usize, raw_line: &str) -> Result<(), LevelParseError> {
        let line = raw_line.trim_end_matches(['\n', '\r']);

        if self.grid_ended {
            if !line.trim().is_empty() {
                return Err(LevelParseError::UnexpectedContentAfterGrid(line_no));
            }
            return Ok(());
        }

        if self.grid_started {
            if line.trim().is_empty() {
                self.grid_ended = true;
            } else {
                self.rows.push(line.to_string());
            }
            return Ok(());
        }

        if line.trim().is_empty() {
            return Ok(());
        }

        if self.all_directives_seen() && Self::is_grid_line(line) {
            self.grid_started = true;
            self.rows.push(line.to_string());
            return Ok(());
        }

        self.feed_directive(line_no, line)
    }

    fn feed_directive(&mut self, line_no: usize, line: &str) -> Result<(), LevelParseError> {
        let mut parts = line.split_whitespace();
        let keyword = parts
            .next()
            .ok_or_else(|| LevelParseError::MalformedDirective {
                line: line_no,
                text: line.to_string(),
            })?;

        if !DIRECTIVES.contains(&keyword) {
            return Err(LevelParseError::UnknownDirective(
                keyword.to_string(),
                line_no,
            ));
        }

        let rest: Vec<&str> = parts.collect();
        if rest.is_empty() {
            return Err(LevelParseError::MalformedDirective {
                line: line_no,
                text: line.to_string(),
            });
        }

        match keyword {
            "NO" | "SO" | "WE" | "EA" if rest.len() != 1 => {
                Err(LevelParseError::MalformedDirective {
                    line: line_no,
                    text: line.to_string(),
                })
            }
            "NO" => self.set_texture_once(Texture::North, rest[0]),
            "SO" => self.set_texture_once(Texture::South, rest[0]),
            "WE" => self.set_texture_once(Texture::West, rest[0]),
            "EA" => self.set_texture_once(Texture::East, rest[0]),
            "F" | "C" if rest.len() != 1 => Err(LevelParseError::MalformedDirective {
                line: line_no,
                text: line.to_string(),
            }),
            "F" | "C" => {
                let rgb = parse_rgb(rest[0], line_no)?;
                let slot = if keyword == "F" {
                    &mut self.floor
                } else {
                    &mut self.ceiling
                };
                if slot.is_some() {
                    return Err(LevelParseError::DuplicateDirective(keyword.to_string()));
                }
                *slot = Some(rgb);
                Ok(())
            }
            _ => unreachable!("directive set is closed over DIRECTIVES"),
        }
    }

    /// Assigns a texture-path slot once, rejecting a second occurrence.
    fn set_texture_once(&mut self, which: Texture, value: &str) -> Result<(), LevelParseError> {
        let slot = match which {
            Texture::North => &mut self.tex_no,
            Texture::South => &mut self.tex_so,
            Texture::West => &mut self.tex_we,
            Texture::East => &mut self.tex_ea,
        };
        if slot.is_some() {
            return Err(LevelParseError::DuplicateDirective(which.keyword().to_string()));
        }
        *slot = Some(value.to_string());
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum Texture {
    North,
    South,
    West,
    East,
}

impl Texture {
    fn keyword(self) -> &'static str {
        match self {
            Texture::North => "NO",
            Texture::South => "SO",
            Texture::West => "WE",
            Texture::East => "EA",
        }
    }
}

fn parse_rgb(text: &str, line_no: usize) -> Result<[u8; 3], LevelParseError> {
    let bad = || LevelParseError::MalformedRGB {
        line: line_no,
        text: text.to_string(),
    };
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 3 {
        return Err(bad());
    }
    let mut out = [0u8; 3];
    for (i, p) in parts.iter().enumerate() {
        if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        let v: u32 = p.parse().map_err(|_| bad())?;
        if v > 255 {
            return Err(bad());
        }
        out[i] = v as u8;
    }
    Ok(out)
}

/// Tokenizes `reader` into a [`RawDescriptor`]. Directives and colors are
/// `Option` here because §4.B (completeness) — not this function — is
/// responsible for rejecting missing ones; §4.A only reports malformed or
/// duplicated syntax.
pub fn parse_descriptor<R: Read>(reader: R) -> Result<RawDescriptor, LevelParseError> {
    let buf = std::io::BufReader::new(reader);
    let mut parser = Parser::new();
    for (idx, line) in buf.lines().enumerate() {
        let line = line?;
        parser.feed_line(idx + 1, &line)?;
    }
    Ok(RawDescriptor {
        tex_no: parser.tex_no,
        tex_so: parser.tex_so,
        tex_we: parser.tex_we,
        tex_ea: parser.tex_ea,
        ceiling: parser.ceiling,
        floor: parser.floor,
        rows: parser.rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "\
NO ./n.xpm
SO ./s.xpm
WE ./w.xpm
EA ./e.xpm
F 220,100,0
C 225,30,0
";

    #[test]
    fn parses_minimal_descriptor() {
        let text = format!("{HEADER}\n111\n1N1\n111\n");
        let d = parse_descriptor(text.as_bytes()).unwrap();
        assert_eq!(d.tex_no, Some("./n.xpm".to_string()));
        assert_eq!(d.floor, Some([220, 100, 0]));
        assert_eq!(d.ceiling, Some([225, 30, 0]));
        assert_eq!(d.rows, vec!["111", "1N1", "111"]);
    }

    #[test]
    fn directive_order_is_free() {
        let text = "\
C 225,30,0
WE ./w.xpm
F 220,100,0
NO ./n.xpm
EA ./e.xpm
SO ./s.xpm

111
1N1
111
";
        let d = parse_descriptor(text.as_bytes()).unwrap();
        assert_eq!(d.rows.len(), 3);
    }

    #[test]
    fn rejects_duplicate_directive() {
        let text = format!("{HEADER}NO ./again.xpm\n\n111\n1N1\n111\n");
        let err = parse_descriptor(text.as_bytes()).unwrap_err();
        assert_eq!(err, LevelParseError::DuplicateDirective("NO".to_string()));
    }

    #[test]
    fn rejects_unknown_directive() {
        let text = "XX foo\n".to_string() + HEADER + "111\n1N1\n111\n";
        let err = parse_descriptor(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LevelParseError::UnknownDirective(kw, _) if kw == "XX"));
    }

    #[test]
    fn rejects_malformed_rgb() {
        let text = "\
NO ./n.xpm
SO ./s.xpm
WE ./w.xpm
EA ./e.xpm
F 220,100
C 225,30,0

111
1N1
111
";
        let err = parse_descriptor(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LevelParseError::MalformedRGB { .. }));
    }

    #[test]
    fn grid_terminates_at_blank_line() {
        let text = format!("{HEADER}\n111\n1N1\n111\n\n");
        let d = parse_descriptor(text.as_bytes()).unwrap();
        assert_eq!(d.rows.len(), 3);
    }

    #[test]
    fn rejects_content_after_grid_blank_terminator_when_nonblank() {
        let text = format!("{HEADER}\n111\n1N1\n111\n\n1\n");
        let err = parse_descriptor(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LevelParseError::UnexpectedContentAfterGrid(_)
        ));
    }
}
