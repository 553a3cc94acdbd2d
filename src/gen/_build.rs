//
// EVERYTHING BELOW THIS POINT WAS AUTO-GENERATED DURING COMPILATION. DO NOT MODIFY.
//
#[doc=r#"The features that were enabled during compilation."#]
#[allow(dead_code)]
pub const FEATURES: [&str; 1] = ["DEFAULT"];
#[doc=r#"The features as a comma-separated string."#]
#[allow(dead_code)]
pub const FEATURES_STR: &str = r"DEFAULT";
#[doc=r#"The features as above, as lowercase strings."#]
#[allow(dead_code)]
pub const FEATURES_LOWERCASE: [&str; 1] = ["default"];
#[doc=r#"The feature-string as above, from lowercase strings."#]
#[allow(dead_code)]
pub const FEATURES_LOWERCASE_STR: &str = r"default";
#[doc=r#"An array of effective dependencies as documented by `Cargo.lock`."#]
#[allow(dead_code)]
pub const DEPENDENCIES: [(&str, &str); 123] = [("aho-corasick", "1.1.4"), ("android_system_properties", "0.1.5"), ("anes", "0.1.6"), ("anstyle", "1.0.14"), ("autocfg", "1.5.1"), ("built", "0.6.1"), ("bumpalo", "3.20.3"), ("cargo-lock", "9.0.0"), ("cast", "0.3.0"), ("cc", "1.4.0"), ("cfg-if", "1.0.4"), ("chrono", "0.4.45"), ("ciborium", "0.2.2"), ("ciborium-io", "0.2.2"), ("ciborium-ll", "0.2.2"), ("clap", "4.6.5"), ("clap_builder", "4.6.5"), ("clap_lex", "1.1.0"), ("core-foundation-sys", "0.8.7"), ("criterion", "0.5.1"), ("criterion-plot", "0.5.0"), ("crossbeam-deque", "0.8.7"), ("crossbeam-epoch", "0.9.20"), ("crossbeam-utils", "0.8.22"), ("crunchy", "0.2.4"), ("displaydoc", "0.2.7"), ("dotmatrix", "0.3.2"), ("dotmatrix-common", "0.3.2"), ("either", "1.17.0"), ("equivalent", "1.0.2"), ("find-msvc-tools", "0.1.9"), ("form_urlencoded", "1.2.2"), ("futures-core", "0.3.33"), ("futures-task", "0.3.33"), ("futures-util", "0.3.33"), ("half", "2.7.1"), ("hashbrown", "0.17.1"), ("hermit-abi", "0.5.2"), ("iana-time-zone", "0.1.65"), ("iana-time-zone-haiku", "0.1.2"), ("icu_collections", "2.2.0"), ("icu_locale_core", "2.2.0"), ("icu_normalizer", "2.2.0"), ("icu_normalizer_data", "2.2.0"), ("icu_properties", "2.2.0"), ("icu_properties_data", "2.2.0"), ("icu_provider", "2.2.0"), ("idna", "1.1.0"), ("idna_adapter", "1.2.2"), ("indexmap", "2.14.0"), ("is-terminal", "0.4.17"), ("itertools", "0.10.5"), ("itoa", "1.0.18"), ("js-sys", "0.3.103"), ("libc", "0.2.189"), ("litemap", "0.8.2"), ("log", "0.4.33"), ("memchr", "2.8.3"), ("num-traits", "0.2.19"), ("once_cell", "1.21.4"), ("oorandom", "11.1.5"), ("percent-encoding", "2.3.2"), ("pin-project-lite", "0.2.17"), ("plotters", "0.3.7"), ("plotters-backend", "0.3.7"), ("plotters-svg", "0.3.7"), ("potential_utf", "0.1.5"), ("proc-macro2", "1.0.107"), ("quote", "1.0.47"), ("rayon", "1.12.0"), ("rayon-core", "1.13.0"), ("regex", "1.13.1"), ("regex-automata", "0.4.16"), ("regex-syntax", "0.8.11"), ("rustversion", "1.0.23"), ("same-file", "1.0.6"), ("semver", "1.0.28"), ("serde", "1.0.229"), ("serde_core", "1.0.229"), ("serde_derive", "1.0.229"), ("serde_json", "1.0.151"), ("serde_spanned", "0.6.9"), ("shlex", "2.0.1"), ("slab", "0.4.12"), ("smallvec", "1.15.2"), ("stable_deref_trait", "1.2.1"), ("syn", "2.0.119"), ("syn", "3.0.3"), ("synstructure", "0.13.2"), ("tinystr", "0.8.3"), ("tinytemplate", "1.2.1"), ("toml", "0.7.8"), ("toml_datetime", "0.6.11"), ("toml_edit", "0.19.15"), ("unicode-ident", "1.0.24"), ("url", "2.5.8"), ("utf8_iter", "1.0.4"), ("walkdir", "2.5.0"), ("wasm-bindgen", "0.2.126"), ("wasm-bindgen-macro", "0.2.126"), ("wasm-bindgen-macro-support", "0.2.126"), ("wasm-bindgen-shared", "0.2.126"), ("web-sys", "0.3.103"), ("winapi-util", "0.1.11"), ("windows-core", "0.62.2"), ("windows-implement", "0.60.2"), ("windows-interface", "0.59.3"), ("windows-link", "0.2.1"), ("windows-result", "0.4.1"), ("windows-strings", "0.5.1"), ("windows-sys", "0.61.2"), ("winnow", "0.5.40"), ("writeable", "0.6.3"), ("yoke", "0.8.3"), ("yoke-derive", "0.8.2"), ("zerocopy", "0.8.55"), ("zerocopy-derive", "0.8.55"), ("zerofrom", "0.1.8"), ("zerofrom-derive", "0.1.7"), ("zerotrie", "0.2.4"), ("zerovec", "0.11.6"), ("zerovec-derive", "0.11.3"), ("zmij", "1.0.23")];
#[doc=r#"The effective dependencies as a comma-separated string."#]
#[allow(dead_code)]
pub const DEPENDENCIES_STR: &str = r"aho-corasick 1.1.4, android_system_properties 0.1.5, anes 0.1.6, anstyle 1.0.14, autocfg 1.5.1, built 0.6.1, bumpalo 3.20.3, cargo-lock 9.0.0, cast 0.3.0, cc 1.4.0, cfg-if 1.0.4, chrono 0.4.45, ciborium 0.2.2, ciborium-io 0.2.2, ciborium-ll 0.2.2, clap 4.6.5, clap_builder 4.6.5, clap_lex 1.1.0, core-foundation-sys 0.8.7, criterion 0.5.1, criterion-plot 0.5.0, crossbeam-deque 0.8.7, crossbeam-epoch 0.9.20, crossbeam-utils 0.8.22, crunchy 0.2.4, displaydoc 0.2.7, dotmatrix 0.3.2, dotmatrix-common 0.3.2, either 1.17.0, equivalent 1.0.2, find-msvc-tools 0.1.9, form_urlencoded 1.2.2, futures-core 0.3.33, futures-task 0.3.33, futures-util 0.3.33, half 2.7.1, hashbrown 0.17.1, hermit-abi 0.5.2, iana-time-zone 0.1.65, iana-time-zone-haiku 0.1.2, icu_collections 2.2.0, icu_locale_core 2.2.0, icu_normalizer 2.2.0, icu_normalizer_data 2.2.0, icu_properties 2.2.0, icu_properties_data 2.2.0, icu_provider 2.2.0, idna 1.1.0, idna_adapter 1.2.2, indexmap 2.14.0, is-terminal 0.4.17, itertools 0.10.5, itoa 1.0.18, js-sys 0.3.103, libc 0.2.189, litemap 0.8.2, log 0.4.33, memchr 2.8.3, num-traits 0.2.19, once_cell 1.21.4, oorandom 11.1.5, percent-encoding 2.3.2, pin-project-lite 0.2.17, plotters 0.3.7, plotters-backend 0.3.7, plotters-svg 0.3.7, potential_utf 0.1.5, proc-macro2 1.0.107, quote 1.0.47, rayon 1.12.0, rayon-core 1.13.0, regex 1.13.1, regex-automata 0.4.16, regex-syntax 0.8.11, rustversion 1.0.23, same-file 1.0.6, semver 1.0.28, serde 1.0.229, serde_core 1.0.229, serde_derive 1.0.229, serde_json 1.0.151, serde_spanned 0.6.9, shlex 2.0.1, slab 0.4.12, smallvec 1.15.2, stable_deref_trait 1.2.1, syn 2.0.119, syn 3.0.3, synstructure 0.13.2, tinystr 0.8.3, tinytemplate 1.2.1, toml 0.7.8, toml_datetime 0.6.11, toml_edit 0.19.15, unicode-ident 1.0.24, url 2.5.8, utf8_iter 1.0.4, walkdir 2.5.0, wasm-bindgen 0.2.126, wasm-bindgen-macro 0.2.126, wasm-bindgen-macro-support 0.2.126, wasm-bindgen-shared 0.2.126, web-sys 0.3.103, winapi-util 0.1.11, windows-core 0.62.2, windows-implement 0.60.2, windows-interface 0.59.3, windows-link 0.2.1, windows-result 0.4.1, windows-strings 0.5.1, windows-sys 0.61.2, winnow 0.5.40, writeable 0.6.3, yoke 0.8.3, yoke-derive 0.8.2, zerocopy 0.8.55, zerocopy-derive 0.8.55, zerofrom 0.1.8, zerofrom-derive 0.1.7, zerotrie 0.2.4, zerovec 0.11.6, zerovec-derive 0.11.3, zmij 1.0.23";
//
// EVERYTHING ABOVE THIS POINT WAS AUTO-GENERATED DURING COMPILATION. DO NOT MODIFY.
//
