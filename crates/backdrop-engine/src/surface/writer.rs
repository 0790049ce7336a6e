use std::io::Write;

use super::Surface;

/// Surface that streams each write as a CSS rule: `selector { name: value; }`.
///
/// IO errors are logged once and further writes are dropped, since a broken
/// pipe on a decorative stream must not stop the animation loop.
pub struct WriterSurface<W: Write> {
    selector: String,
    out: W,
    failed: bool,
}

impl<W: Write> WriterSurface<W> {
    pub fn new(selector: impl Into<String>, out: W) -> Self {
        Self {
            selector: selector.into(),
            out,
            failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for WriterSurface<W> {
    fn set_property(&mut self, name: &str, value: &str) {
        if self.failed {
            return;
        }
        let res = writeln!(self.out, "{} {{ {name}: {value}; }}", self.selector)
            .and_then(|_| self.out.flush());
        if let Err(e) = res {
            log::warn!("surface `{}` stopped accepting writes: {e}", self.selector);
            self.failed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[derive(Default)]
    struct Broken {
        attempts: u32,
    }

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_css_rule_lines() {
        let mut s = WriterSurface::new(".hero", Vec::new());
        s.set_property("--hero-bg", "red");
        s.set_property("--hero-bg", "blue");
        let text = String::from_utf8(s.into_inner()).unwrap();
        assert_eq!(text, ".hero { --hero-bg: red; }\n.hero { --hero-bg: blue; }\n");
    }

    #[test]
    fn io_error_disables_surface() {
        let mut s = WriterSurface::new("nav", Broken::default());
        s.set_property("--nav-bg", "red");
        s.set_property("--nav-bg", "red");
        s.set_property("--nav-bg", "red");
        assert_eq!(s.into_inner().attempts, 1);
    }
}
