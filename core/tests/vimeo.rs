use folio_core::{embed_url_for, VimeoId, VimeoIdError};

#[test]
fn standard_link_becomes_autoplay_embed() {
    assert_eq!(
        embed_url_for("https://vimeo.com/123456789").as_deref(),
        Some("https://player.vimeo.com/video/123456789?autoplay=1")
    );
}

#[test]
fn non_links_do_not_launch() {
    assert_eq!(embed_url_for("not-a-url"), None);
    assert_eq!(
        VimeoId::from_player_link("https://vimeo.com/about"),
        Err(VimeoIdError::MissingId)
    );
    assert_eq!(
        VimeoId::from_player_link("https://youtube.com/watch?v=1"),
        Err(VimeoIdError::NotVimeo)
    );
}

#[test]
fn player_link_takes_the_last_numeric_segment() {
    let id = VimeoId::from_player_link("https://vimeo.com/channels/42/987654").expect("id");
    assert_eq!(id.as_str(), "987654");
    let id = VimeoId::from_player_link("https://player.vimeo.com/video/555?h=abc").expect("id");
    assert_eq!(id.as_str(), "555");
}

#[test]
fn reference_reads_the_first_direct_id() {
    let id = VimeoId::from_reference("openVimeo('https://vimeo.com/1029384756')").expect("id");
    assert_eq!(id.as_str(), "1029384756");
    assert_eq!(id.thumbnail_url(), "https://vumbnail.com/1029384756_large.jpg");
    assert_eq!(
        VimeoId::from_reference("openLightbox(this)"),
        Err(VimeoIdError::NotVimeo)
    );
}
