//! Properties that hold for every input.

use proptest::prelude::*;
use tana_babel::markdown_to_outline_paragraphs;

fn depth_of(line: &str) -> usize {
    let spaces = line.len() - line.trim_start_matches(' ').len();
    spaces / 2
}

proptest! {
    #[test]
    fn output_always_has_preamble(input in any::<String>()) {
        let out = markdown_to_outline_paragraphs(&input);
        prop_assert!(out.starts_with("%%tana%%\n"));
    }

    #[test]
    fn one_bullet_per_non_blank_line(input in "[ #*_=0-9a-c.\t\n-]{0,200}") {
        let out = markdown_to_outline_paragraphs(&input);
        let expected = input.split('\n').filter(|line| !line.trim().is_empty()).count();
        let body: Vec<&str> = out
            .split('\n')
            .skip(1)
            .filter(|line| !line.is_empty())
            .collect();
        prop_assert_eq!(body.len(), expected);
    }

    #[test]
    fn bullets_are_well_formed(input in "[ #*_0-9a-c.\t\n-]{0,200}") {
        let out = markdown_to_outline_paragraphs(&input);
        let mut previous: Option<usize> = None;
        for line in out.split('\n').skip(1).filter(|line| !line.is_empty()) {
            let spaces = line.len() - line.trim_start_matches(' ').len();
            prop_assert_eq!(spaces % 2, 0);

            let bullet = line.trim_start_matches(' ');
            prop_assert!(bullet.starts_with("- "));
            prop_assert!(bullet.len() > 2);

            let depth = depth_of(line);
            match previous {
                None => prop_assert_eq!(depth, 0),
                Some(prev) => prop_assert!(depth <= prev + 1),
            }
            previous = Some(depth);
        }
    }
}
