/// Type definitions of a low-level query string representation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SPL {
    pub spl: String,
}

impl SPL {
    pub fn new() -> SPL {
        SPL {
            spl: String::new(),
        }
    }
    pub fn append_syntax(&mut self, spl: &str) {
        self.spl.push_str(spl);
    }
    /// Append optional text, doing nothing when absent.
    pub fn append_optional(&mut self, spl: Option<&str>) {
        if let Some(spl) = spl {
            self.append_syntax(spl);
        }
    }
    /// Append text with `<` and `>` replaced by their XML entities.
    ///
    /// Other markup characters (`&`, quotes) are left as they are.
    pub fn append_angle_escaped(&mut self, spl: &str) {
        for c in spl.chars() {
            match c {
                '<' => self.spl.push_str("&lt;"),
                '>' => self.spl.push_str("&gt;"),
                c => self.spl.push(c),
            }
        }
    }
    pub fn is_empty(&self) -> bool {
        self.spl.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SPL;

    #[test]
    fn escapes_only_angle_brackets() {
        let mut spl = SPL::new();
        spl.append_angle_escaped(r#"val > 5 & x<"y""#);
        assert_eq!(spl.spl, r#"val &gt; 5 & x&lt;"y""#);
    }

    #[test]
    fn appends_in_order() {
        let mut spl = SPL::new();
        spl.append_optional(None);
        assert!(spl.is_empty());
        spl.append_optional(Some("search "));
        spl.append_syntax("x=1");
        assert_eq!(spl.spl, "search x=1");
    }
}
