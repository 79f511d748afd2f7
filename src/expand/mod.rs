//! Expansion of folder patterns into folder + file pattern pairs

use crate::domain::PathInstruction;

pub mod pattern;

pub use pattern::generate_file_pattern;

/// Emit every instruction unchanged, followed by a file-pattern sibling when its
/// path is a folder pattern.
pub fn expand_path_instructions(instructions: &[PathInstruction]) -> Vec<PathInstruction> {
    let mut expanded = Vec::with_capacity(instructions.len() * 2);

    for instruction in instructions {
        expanded.push(instruction.clone());

        let file_pattern = generate_file_pattern(&instruction.path);
        if file_pattern != instruction.path {
            tracing::debug!("Derived {} from {}", file_pattern, instruction.path);
            expanded.push(PathInstruction::new(file_pattern, instruction.instructions.clone()));
        }
    }

    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_entry_follows_folder_entry() {
        let input = vec![
            PathInstruction::new("**/{http,grpc}*/**", "Review error handling"),
            PathInstruction::new("**/src/**", "Check for unused imports"),
            PathInstruction::new("**/{db}*/**", "Check transactions"),
        ];

        let expanded = expand_path_instructions(&input);

        assert_eq!(
            expanded,
            vec![
                PathInstruction::new("**/{http,grpc}*/**", "Review error handling"),
                PathInstruction::new("**/*{http*,grpc*}*", "Review error handling"),
                PathInstruction::new("**/src/**", "Check for unused imports"),
                PathInstruction::new("**/{db}*/**", "Check transactions"),
                PathInstruction::new("**/*{db*}*", "Check transactions"),
            ]
        );
    }

    #[test]
    fn test_non_folder_patterns_are_kept_alone() {
        let input = vec![
            PathInstruction::new("**/*.rs", "Rust"),
            PathInstruction::new("docs/**", "Docs"),
        ];
        assert_eq!(expand_path_instructions(&input), input);
    }

    #[test]
    fn test_every_original_survives() {
        let input = vec![
            PathInstruction::new("**/{a,,b}*/**", "one"),
            PathInstruction::new("**/{ , }*/**", "two"),
            PathInstruction::new("**/lib/**", "three"),
        ];
        let expanded = expand_path_instructions(&input);

        let originals: Vec<_> = expanded.iter().filter(|i| input.contains(i)).collect();
        assert_eq!(originals.len(), input.len());
        assert!(expanded.len() <= input.len() * 2);
        assert_eq!(expanded.len(), 5);
        assert_eq!(expanded[1].path, "**/*{a*,b*}*");
        assert_eq!(expanded[3].path, "**/*{}*");
    }

    #[test]
    fn test_empty_input() {
        assert!(expand_path_instructions(&[]).is_empty());
    }
}
