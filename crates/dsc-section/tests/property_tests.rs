use dsc_section::{EditorConfig, find_matches, insert, remove};
use proptest::prelude::*;

/// Lines drawn from the shapes found in real DSC files.
fn dsc_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("[Components]\n".to_string()),
        Just("[Defines]\n".to_string()),
        Just("[Foo Bar]\n".to_string()),
        Just("\n".to_string()),
        Just("  \t\n".to_string()),
        "  (Pkg|Mde|Uefi)[A-Za-z/]{0,8}\\.inf\n",
        "[ #=|A-Za-z0-9]{0,12}\n",
    ]
}

fn dsc_file() -> impl Strategy<Value = String> {
    prop::collection::vec(dsc_line(), 0..24).prop_map(|lines| lines.concat())
}

fn run_insert(input: &str, entry: &str) -> String {
    let mut output = Vec::new();
    insert(input.as_bytes(), &mut output, entry, &EditorConfig::default()).unwrap();
    String::from_utf8(output).unwrap()
}

fn run_remove(input: &str, target: &str) -> (String, usize) {
    let mut output = Vec::new();
    let removed = remove(input.as_bytes(), &mut output, target, &EditorConfig::default()).unwrap();
    (String::from_utf8(output).unwrap(), removed.len())
}

fn count(input: &str, target: &str) -> usize {
    find_matches(input.as_bytes(), target, &EditorConfig::default())
        .unwrap()
        .len()
}

proptest! {
    #[test]
    fn insert_adds_exactly_one_line(input in dsc_file(), entry in "[A-Za-z]{1,6}") {
        let output = run_insert(&input, &entry);
        let entry_line = format!("  {}\n", entry);

        prop_assert_eq!(output.len(), input.len() + entry_line.len());
        prop_assert_eq!(output.lines().count(), input.lines().count() + 1);

        // Removing the single inserted line restores the input
        let position = output
            .match_indices(&entry_line)
            .map(|(i, _)| i)
            .find(|&i| {
                let mut rebuilt = output[..i].to_string();
                rebuilt.push_str(&output[i + entry_line.len()..]);
                rebuilt == input
            });
        prop_assert!(position.is_some());
    }

    #[test]
    fn delete_is_idempotent(input in dsc_file(), target in "(Pkg|Mde|Uefi)?") {
        let (once, _) = run_remove(&input, &target);
        let (twice, removed_again) = run_remove(&once, &target);

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(removed_again, 0);
    }

    #[test]
    fn delete_removes_exactly_the_counted_lines(input in dsc_file(), target in "(Pkg|Mde|Uefi)") {
        let matched = count(&input, &target);
        let (output, removed) = run_remove(&input, &target);

        prop_assert_eq!(matched, removed);
        prop_assert_eq!(count(&output, &target), 0);
        prop_assert_eq!(output.lines().count() + removed, input.lines().count());
    }

    #[test]
    fn delete_then_insert_leaves_one_match(input in dsc_file(), entry in "Uefi[A-Za-z]{1,4}") {
        let (without, _) = run_remove(&input, &entry);
        let restored = run_insert(&without, &entry);
        let in_section = count(&restored, &entry);

        // The entry lands in the section when there is one, else at end of file
        if input.contains("[Components]\n") {
            prop_assert_eq!(in_section, 1);
        } else {
            prop_assert_eq!(in_section, 0);
            let tail = format!("  {}\n", entry);
            prop_assert!(restored.ends_with(&tail), "entry not appended at end of file");
        }
    }

    #[test]
    fn arbitrary_bytes_never_panic(input in prop::collection::vec(any::<u8>(), 0..256)) {
        let config = EditorConfig::default();
        let mut output = Vec::new();
        let _ = find_matches(&input[..], "", &config).unwrap();
        let _ = remove(&input[..], &mut output, "zzz", &config).unwrap();
        prop_assert!(output.len() <= input.len());
    }
}
