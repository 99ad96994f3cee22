use super::*;

#[test]
fn form_posts_name_to_download_endpoint() {
    let form = DownloadForm::for_name(&PageConfig::default(), "Aria Stone");
    assert_eq!(
        form,
        DownloadForm {
            action: "/download-plot".to_owned(),
            method: "post",
            field: "name".to_owned(),
            value: "Aria Stone".to_owned(),
            label: "Download".to_owned(),
        }
    );
}

#[test]
fn form_keeps_markup_characters_in_value() {
    let form = DownloadForm::for_name(&PageConfig::default(), r#""><script>x</script>"#);
    assert_eq!(form.value, r#""><script>x</script>"#);
}

#[test]
fn form_follows_configured_endpoint_and_field() {
    let config = PageConfig {
        download_endpoint: "/export".to_owned(),
        download_field: "seed".to_owned(),
        download_label: "Save".to_owned(),
        ..PageConfig::default()
    };
    let form = DownloadForm::for_name(&config, "x");
    assert_eq!(form.action, "/export");
    assert_eq!(form.field, "seed");
    assert_eq!(form.label, "Save");
}

#[test]
fn nudges_target_generate_and_random_name_controls() {
    let [generate, random_name] = control_nudges(&PageConfig::default());
    assert_eq!(generate.0, "generate");
    assert_eq!((generate.1, generate.2), ("margin-right", "0.25rem"));
    assert_eq!(random_name.0, "random-name");
    assert_eq!((random_name.1, random_name.2), ("margin-left", "0rem"));
}
