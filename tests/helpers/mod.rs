#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;

use docsift::domain::{Category, Forest, ModelArtifacts, TfidfState, Tree, TreeNode};

pub const TEST_TOKEN: &str = "test-token-123";

const BOUNDARY: &str = "docsift-test-boundary";

/// Tiny hand-built artifacts: one indicator term per category, and one tree
/// per category voting its one-hot leaf when the term's weight is present,
/// a uniform leaf otherwise. One matching term therefore makes its category
/// strictly dominant, and a zero vector yields the uniform distribution.
pub fn test_artifacts() -> Arc<ModelArtifacts> {
    // Indicator terms are already in stemmed form.
    let terms = ["budget", "staff", "contract", "patient", "server"];
    let vectorizer = TfidfState {
        vocabulary: terms
            .iter()
            .enumerate()
            .map(|(index, term)| (term.to_string(), index))
            .collect::<HashMap<_, _>>(),
        idf: vec![1.0; terms.len()],
    };

    let trees = (0..Category::COUNT)
        .map(|category_index| {
            let mut one_hot = vec![0.0; Category::COUNT];
            one_hot[category_index] = 1.0;
            Tree {
                nodes: vec![
                    TreeNode::Split {
                        feature: category_index,
                        threshold: 0.5,
                        left: 1,
                        right: 2,
                    },
                    TreeNode::Leaf {
                        distribution: vec![1.0 / Category::COUNT as f64; Category::COUNT],
                    },
                    TreeNode::Leaf { distribution: one_hot },
                ],
            }
        })
        .collect();

    let forest = Forest {
        n_features: terms.len(),
        classes: Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
        trees,
    };

    Arc::new(ModelArtifacts { vectorizer, forest })
}

/// Minimal but structurally valid DOCX package: zip container with a
/// `word/document.xml` holding one paragraph per input string.
pub fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|text| format!("<w:p><w:r><w:t>{text}</w:t></w:r></w:p>"))
        .collect();
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );

    let mut buffer = Vec::new();
    {
        let mut writer = zip::ZipWriter::new(Cursor::new(&mut buffer));
        let options = zip::write::SimpleFileOptions::default();

        writer
            .start_file("[Content_Types].xml", options)
            .unwrap();
        writer
            .write_all(
                br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/></Types>"#,
            )
            .unwrap();

        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(document.as_bytes()).unwrap();
        writer.finish().unwrap();
    }
    buffer
}

/// Multipart POST to /classify. `filename: None` sends a body with no file
/// part at all.
pub fn classify_request(
    token: Option<&str>,
    filename: Option<&str>,
    data: &[u8],
) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();

    if let Some(filename) = filename {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder()
        .method("POST")
        .uri("/classify")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    builder.body(Body::from(body)).unwrap()
}
