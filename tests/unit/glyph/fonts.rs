use super::*;

const WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);

fn missing_chain() -> FontChain {
    FontChain::new(
        vec![
            FontDescriptor::new(["/nonexistent/Emoji.ttc", "NoSuchFont.ttf"], 150),
            FontDescriptor::new(["/nonexistent/Sans.ttf"], 80),
        ],
        Some(80),
    )
}

#[test]
fn chain_expands_in_priority_order() {
    let candidates = missing_chain().candidates();
    assert_eq!(candidates.len(), 4);
    assert_eq!(
        candidates[0].source,
        FontSource::File("/nonexistent/Emoji.ttc".into())
    );
    assert_eq!(candidates[1].point_size, 150);
    assert_eq!(candidates[2].point_size, 80);
    assert_eq!(candidates[3].source, FontSource::Builtin);
}

#[test]
fn first_success_stops_at_first_ok() {
    let mut tried = Vec::new();
    let (winner, value) = first_success([1, 2, 3], |c| {
        tried.push(*c);
        if *c == 2 { Ok(*c * 10) } else { Err(FontError::EmptyText) }
    })
    .unwrap();
    assert_eq!((winner, value), (2, 20));
    assert_eq!(tried, vec![1, 2]);
}

#[test]
fn first_success_collects_every_failure() {
    let err = first_success(["a", "b"], |c| {
        Err::<(), _>(FontError::Missing {
            path: PathBuf::from(*c),
        })
    })
    .unwrap_err();
    assert_eq!(
        err,
        FontError::Exhausted {
            attempts: vec![
                FontError::Missing { path: "a".into() },
                FontError::Missing { path: "b".into() },
            ]
        }
    );
}

#[test]
fn missing_files_fall_through_to_builtin() {
    let library = FontLibrary::new(Vec::new());
    let (winner, sprite) = library.render_first(&missing_chain(), "D", WHITE).unwrap();
    assert_eq!(winner.source, FontSource::Builtin);
    assert!(sprite.ink_height() > 0);
}

#[test]
fn emoji_without_fonts_exhausts_the_chain() {
    let library = FontLibrary::new(Vec::new());
    let err = library.render_first(&missing_chain(), "🦎", WHITE).unwrap_err();
    let FontError::Exhausted { attempts } = err else {
        panic!("expected exhausted chain, got {err:?}");
    };
    assert_eq!(attempts.len(), 4);
    assert!(matches!(attempts[0], FontError::Missing { .. }));
    assert!(matches!(attempts[3], FontError::UnsupportedGlyph { .. }));
}

#[test]
fn relative_paths_resolve_against_search_dirs() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Fake.ttf"), b"not a font").unwrap();
    let library = FontLibrary::new(vec![PathBuf::from("/nonexistent"), dir.path().to_path_buf()]);

    let resolved = library.resolve(Path::new("Fake.ttf")).unwrap();
    assert_eq!(resolved, dir.path().join("Fake.ttf"));
    assert!(matches!(
        library.resolve(Path::new("Other.ttf")),
        Err(FontError::Missing { .. })
    ));

    // Bytes load but do not register a family.
    let chain = FontChain::new(vec![FontDescriptor::new(["Fake.ttf"], 80)], None);
    let err = library.render_first(&chain, "A", WHITE).unwrap_err();
    let FontError::Exhausted { attempts } = err else {
        panic!("expected exhausted chain");
    };
    assert!(matches!(attempts[0], FontError::NoFamily { .. }));
}

#[test]
fn loaded_fonts_share_one_blob() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Cached.ttf");
    std::fs::write(&path, b"abc").unwrap();
    let library = FontLibrary::new(Vec::new());

    let (_, first) = library.load(&path).unwrap();
    std::fs::write(&path, b"changed").unwrap();
    let (_, second) = library.load(&path).unwrap();
    assert_eq!(first.id(), second.id());
    assert_eq!(first.data().as_ptr(), second.data().as_ptr());
    assert_eq!(second.data(), b"abc");
}

#[test]
fn builtin_only_drops_file_candidates() {
    let chain = missing_chain().builtin_only();
    assert_eq!(chain.candidates().len(), 1);
    assert!(FontChain::new(Vec::new(), None).candidates().is_empty());
}
