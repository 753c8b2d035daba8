#[cfg(test)]
mod tests {

    mod slug_tests {
        use crate::services::slug::{make_unique, normalize, validate};
        use std::collections::HashSet;

        fn set(slugs: &[&str]) -> HashSet<String> {
            slugs.iter().map(|s| s.to_string()).collect()
        }

        #[test]
        fn test_normalize_basic() {
            assert_eq!(normalize("Hello World"), "hello-world");
        }

        #[test]
        fn test_normalize_special_characters() {
            assert_eq!(normalize("Hello, World!"), "hello-world");
        }

        #[test]
        fn test_normalize_unicode() {
            assert_eq!(normalize("Café au lait"), "cafe-au-lait");
        }

        #[test]
        fn test_normalize_numbers() {
            assert_eq!(normalize("Post 123"), "post-123");
        }

        #[test]
        fn test_normalize_multiple_spaces() {
            assert_eq!(normalize("Hello   World"), "hello-world");
        }

        #[test]
        fn test_normalize_leading_trailing_junk() {
            assert_eq!(normalize("  --Hello World--  "), "hello-world");
        }

        #[test]
        fn test_normalize_empty_falls_back() {
            assert_eq!(normalize(""), "untitled");
            assert_eq!(normalize("   ***   "), "untitled");
            assert_eq!(normalize("!!!"), "untitled");
        }

        #[test]
        fn test_normalize_idempotent() {
            for title in ["Hello, World!", "post-2", "Café au lait", "***"] {
                let once = normalize(title);
                assert_eq!(normalize(&once), once);
            }
        }

        #[test]
        fn test_normalize_output_shape() {
            for title in ["  A -- B  ", "a__b", "%%%x%%%", "Ünïcødé Tïtlé"] {
                let s = normalize(title);
                assert!(!s.is_empty());
                assert!(!s.starts_with('-') && !s.ends_with('-'));
                assert!(!s.contains("--"));
                assert!(s
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            }
        }

        #[test]
        fn test_make_unique_no_collision() {
            assert_eq!(make_unique("post", &set(&[])), "post");
            assert_eq!(make_unique("post", &set(&["other"])), "post");
        }

        #[test]
        fn test_make_unique_appends_counter() {
            assert_eq!(make_unique("post", &set(&["post"])), "post-2");
            assert_eq!(
                make_unique("post", &set(&["post", "post-2", "post-3"])),
                "post-4"
            );
        }

        #[test]
        fn test_make_unique_skips_gaps() {
            assert_eq!(make_unique("post", &set(&["post", "post-3"])), "post-2");
        }

        #[test]
        fn test_make_unique_result_not_in_set() {
            let existing = set(&["post", "post-2", "post-5", "hello"]);
            let unique = make_unique("post", &existing);
            assert!(!existing.contains(&unique));
        }

        #[test]
        fn test_make_unique_suffix_shaped_base() {
            // "post-2" existing alone does not collide with base "post"
            assert_eq!(make_unique("post", &set(&["post-2"])), "post");
            // and a base that itself ends in a digit keeps its shape
            assert_eq!(make_unique("post-2", &set(&["post-2"])), "post-2-2");
        }

        #[test]
        fn test_validate_valid() {
            assert!(validate("hello-world"));
            assert!(validate("my-post-2024"));
            assert!(validate("a"));
            assert!(validate("123"));
        }

        #[test]
        fn test_validate_invalid() {
            assert!(!validate(""));
            assert!(!validate("Hello-World"));
            assert!(!validate("hello_world"));
            assert!(!validate("hello world"));
            assert!(!validate(&"a".repeat(201)));
        }
    }

    mod listing_tests {
        use crate::services::listing::{
            ListParams, ListQuery, Page, SortField, SortOrder,
        };

        fn params(page: Option<&str>, page_size: Option<&str>) -> ListParams {
            ListParams {
                page: page.map(String::from),
                page_size: page_size.map(String::from),
                ..Default::default()
            }
        }

        fn query(page: usize, page_size: usize) -> ListQuery {
            ListQuery::from_params(
                &params(Some(&page.to_string()), Some(&page_size.to_string())),
                10,
                100,
            )
        }

        #[test]
        fn test_defaults_when_absent() {
            let q = ListQuery::from_params(&ListParams::default(), 10, 100);
            assert_eq!(q.page, 1);
            assert_eq!(q.page_size, 10);
            assert_eq!(q.order_by, SortField::CreatedAt);
            assert_eq!(q.order, SortOrder::Desc);
            assert!(q.search.is_none());
            assert!(q.tag.is_none());
            assert!(q.published.is_none());
        }

        #[test]
        fn test_non_numeric_falls_back() {
            let q = ListQuery::from_params(&params(Some("abc"), Some("xyz")), 10, 100);
            assert_eq!(q.page, 1);
            assert_eq!(q.page_size, 10);
        }

        #[test]
        fn test_zero_and_negative_clamp() {
            let q = ListQuery::from_params(&params(Some("0"), Some("0")), 10, 100);
            assert_eq!(q.page, 1);
            assert_eq!(q.page_size, 10);

            let q = ListQuery::from_params(&params(Some("-3"), Some("-5")), 10, 100);
            assert_eq!(q.page, 1);
            assert_eq!(q.page_size, 10);
        }

        #[test]
        fn test_page_size_clamped_to_max() {
            let q = ListQuery::from_params(&params(None, Some("500")), 10, 100);
            assert_eq!(q.page_size, 100);
        }

        #[test]
        fn test_blank_search_and_tag_dropped() {
            let p = ListParams {
                search: Some("   ".to_string()),
                tag: Some("".to_string()),
                ..Default::default()
            };
            let q = ListQuery::from_params(&p, 10, 100);
            assert!(q.search.is_none());
            assert!(q.tag.is_none());
        }

        #[test]
        fn test_sort_field_allow_list() {
            assert_eq!(SortField::parse_or_default(Some("title")), SortField::Title);
            assert_eq!(
                SortField::parse_or_default(Some("updatedAt")),
                SortField::UpdatedAt
            );
            assert_eq!(
                SortField::parse_or_default(Some("featured")),
                SortField::Featured
            );
        }

        #[test]
        fn test_sort_field_fallback() {
            assert_eq!(
                SortField::parse_or_default(Some("bogus")),
                SortField::CreatedAt
            );
            assert_eq!(
                SortField::parse_or_default(Some("slug; DROP TABLE articles")),
                SortField::CreatedAt
            );
            assert_eq!(SortField::parse_or_default(None), SortField::CreatedAt);
        }

        #[test]
        fn test_sort_order_parse() {
            assert_eq!(SortOrder::parse_or_default(Some("asc")), SortOrder::Asc);
            assert_eq!(SortOrder::parse_or_default(Some("ASC")), SortOrder::Asc);
            assert_eq!(SortOrder::parse_or_default(Some("desc")), SortOrder::Desc);
            assert_eq!(SortOrder::parse_or_default(Some("sideways")), SortOrder::Desc);
            assert_eq!(SortOrder::parse_or_default(None), SortOrder::Desc);
        }

        #[test]
        fn test_offset() {
            assert_eq!(query(1, 10).offset(), 0);
            assert_eq!(query(3, 10).offset(), 20);
            assert_eq!(query(2, 25).offset(), 25);
        }

        #[test]
        fn test_published_filter_parse() {
            let p = ListParams {
                published: Some("true".to_string()),
                ..Default::default()
            };
            assert_eq!(ListQuery::from_params(&p, 10, 100).published, Some(true));

            let p = ListParams {
                published: Some("false".to_string()),
                ..Default::default()
            };
            assert_eq!(ListQuery::from_params(&p, 10, 100).published, Some(false));

            let p = ListParams {
                published: Some("".to_string()),
                ..Default::default()
            };
            assert_eq!(ListQuery::from_params(&p, 10, 100).published, None);
        }

        #[test]
        fn test_page_envelope_invariants() {
            // 25 records, size 10: 3 pages
            let page = Page::new(vec![0; 10], 25, &query(1, 10));
            assert_eq!(page.total_pages, 3);
            assert!(page.has_next_page);
            assert!(!page.has_prev_page);

            let page = Page::new(vec![0; 10], 25, &query(2, 10));
            assert!(page.has_next_page);
            assert!(page.has_prev_page);

            let page = Page::new(vec![0; 5], 25, &query(3, 10));
            assert!(!page.has_next_page);
            assert!(page.has_prev_page);

            // out-of-range page: empty, no next
            let page = Page::new(Vec::<i32>::new(), 25, &query(4, 10));
            assert_eq!(page.items.len(), 0);
            assert!(!page.has_next_page);
            assert!(page.has_prev_page);
        }

        #[test]
        fn test_page_envelope_empty_result() {
            let page = Page::new(Vec::<i32>::new(), 0, &query(1, 10));
            assert_eq!(page.total, 0);
            assert_eq!(page.total_pages, 0);
            assert!(!page.has_next_page);
            assert!(!page.has_prev_page);
        }

        #[test]
        fn test_page_envelope_exact_multiple() {
            let page = Page::new(vec![0; 10], 20, &query(2, 10));
            assert_eq!(page.total_pages, 2);
            assert!(!page.has_next_page);
        }
    }

    mod storage_tests {
        use crate::services::storage::{extension_for_mime, object_file_name, parse_data_uri};

        #[test]
        fn test_parse_data_uri_png() {
            // one transparent pixel
            let uri = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";
            let (mime, bytes) = parse_data_uri(uri).unwrap();
            assert_eq!(mime, "image/png");
            assert!(!bytes.is_empty());
        }

        #[test]
        fn test_parse_data_uri_rejects_garbage() {
            assert!(parse_data_uri("not a data uri").is_err());
            assert!(parse_data_uri("data:image/png;base64,!!!not-base64!!!").is_err());
            assert!(parse_data_uri("data:;base64,aGk=").is_err());
        }

        #[test]
        fn test_extension_mapping() {
            assert_eq!(extension_for_mime("image/jpeg"), "jpg");
            assert_eq!(extension_for_mime("image/svg+xml"), "svg");
            assert_eq!(extension_for_mime("application/pdf"), "pdf");
            assert_eq!(extension_for_mime("application/x-unknown-thing"), "bin");
        }

        #[test]
        fn test_object_file_name_deterministic() {
            let a = object_file_name(b"same bytes", "image/png");
            let b = object_file_name(b"same bytes", "image/png");
            assert_eq!(a, b);
            assert!(a.ends_with(".png"));

            let c = object_file_name(b"other bytes", "image/png");
            assert_ne!(a, c);
        }
    }

    mod config_tests {
        use crate::Config;
        use std::path::Path;

        #[test]
        fn test_config_load_missing_file() {
            let result = Config::load(Path::new("/nonexistent/path.toml"));
            assert!(result.is_err());
        }

        #[test]
        fn test_config_load_valid_toml() {
            use std::io::Write;
            let temp_dir = std::env::temp_dir();
            let config_path = temp_dir.join("test_atelier_config.toml");

            let config_content = r#"
[site]
title = "Test Site"
description = "A test site"
url = "http://localhost:4201"

[server]
host = "127.0.0.1"
port = 4201

[database]
path = "data/atelier.db"

[storage]
upload_dir = "uploads"
public_base_url = "http://localhost:4201/uploads"
"#;

            let mut file = std::fs::File::create(&config_path).unwrap();
            file.write_all(config_content.as_bytes()).unwrap();

            let config = Config::load(&config_path).unwrap();
            assert_eq!(config.site.title, "Test Site");
            assert_eq!(config.server.port, 4201);
            assert_eq!(config.content.default_page_size, 10);
            assert_eq!(config.content.max_page_size, 100);

            std::fs::remove_file(&config_path).ok();
        }

        #[test]
        fn test_config_rejects_inverted_page_sizes() {
            use std::io::Write;
            let temp_dir = std::env::temp_dir();
            let config_path = temp_dir.join("test_atelier_config_bad.toml");

            let config_content = r#"
[site]
title = "Test Site"
description = "A test site"
url = "http://localhost:4201"

[server]
host = "127.0.0.1"
port = 4201

[database]
path = "data/atelier.db"

[content]
default_page_size = 50
max_page_size = 20

[storage]
upload_dir = "uploads"
public_base_url = "http://localhost:4201/uploads"
"#;

            let mut file = std::fs::File::create(&config_path).unwrap();
            file.write_all(config_content.as_bytes()).unwrap();

            assert!(Config::load(&config_path).is_err());

            std::fs::remove_file(&config_path).ok();
        }
    }

    mod page_key_tests {
        use crate::services::pages;

        #[test]
        fn test_known_keys() {
            for key in ["home", "about", "blog", "projects", "faq", "not-found"] {
                assert!(pages::is_known_key(key));
            }
        }

        #[test]
        fn test_unknown_keys() {
            assert!(!pages::is_known_key("shop"));
            assert!(!pages::is_known_key(""));
            assert!(!pages::is_known_key("Home"));
        }
    }
}
