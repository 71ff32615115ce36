//! Rename preview integration tests

#[cfg(test)]
mod tests {
    use thalia_ops::core::diff::{DiffStyle, RenamePreview, RenderedDiff};

    #[test]
    fn test_library_reorganisation_preview() {
        let moves = vec![
            (
                "/library/Terry Pratchett/Discworld 01 - The Colour of Magic/01.mp3",
                "/library/Terry Pratchett/Discworld/01 - The Colour of Magic/01.mp3",
            ),
            (
                "/library/Ursula K. Le Guin/Earthsea/A Wizard of Earthsea.m4b",
                "/library/Ursula K. Le Guin/Earthsea/A Wizard of Earthsea.m4b",
            ),
            (
                "/library/Unknown/Tom & Jerry's <Best>.mp3",
                "/library/Hanna-Barbera/Tom & Jerry's <Best>.mp3",
            ),
        ];

        let previews = RenamePreview::from_pairs(moves);
        let style = DiffStyle::default();

        let RenderedDiff::Lines { old_line, new_line } = &previews[0].diff else {
            panic!("first entry should be a rename");
        };
        assert_eq!(
            old_line,
            "/library/Terry Pratchett/Discworld<span class=\"diff-removed\"> </span>01 - The Colour of Magic/01.mp3"
        );
        assert_eq!(
            new_line,
            "/library/Terry Pratchett/Discworld<span class=\"diff-added\">/</span>01 - The Colour of Magic/01.mp3"
        );

        assert!(!previews[1].is_rename());
        assert_eq!(
            style.to_markup(&previews[1].diff),
            "<span class=\"diff-none\">no changes</span>"
        );

        let markup = style.to_markup(&previews[2].diff);
        assert!(markup.contains("Tom &amp; Jerry&#39;s &lt;Best&gt;.mp3"));
        assert!(markup.contains("<span class=\"diff-removed\">Unknown</span>"));
        assert!(markup.contains("<span class=\"diff-added\">Hanna-Barbera</span>"));
        assert!(!markup.contains("<Best>"));
    }
}
