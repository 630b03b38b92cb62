// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_article(sections: usize) -> String {
    let section = "## Sectiune\n\nParagraf cu **text important** si un [link intern](/ghiduri/x).\nA doua linie cu [link extern](https://example.com).\n\n### Detalii\n\n- primul element\n- al doilea **element**\n- al treilea [element](/produse/y)\n\n| A | B |\n|---|---|\n| 1 | 2 |\n\n";
    section.repeat(sections)
}

#[allow(dead_code)]
pub fn generate_malformed_article(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        content.push_str(&format!("**neinchis {i} [tot neinchis](/x si ** inca\n"));
    }
    content
}
