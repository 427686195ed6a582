use serde_json::Value;
use tower_lsp::jsonrpc::Result as LspResult;
use tower_lsp::lsp_types::*;

use crate::format::pretty_print;
use crate::lsp::backend::Backend;
use crate::validation::{self, validate_document};

/// Trait for handling diagnostics
#[tower_lsp::async_trait]
pub trait HandleDiagnostics {
    async fn publish_diagnostics(&self, uri: Url);
    fn create_lsp_diagnostic(
        &self,
        validation_diagnostic: validation::Diagnostic,
    ) -> tower_lsp::lsp_types::Diagnostic;
}

/// Trait for handling formatting requests
#[tower_lsp::async_trait]
pub trait HandleFormatting {
    async fn handle_formatting(
        &self,
        params: DocumentFormattingParams,
    ) -> LspResult<Option<Vec<TextEdit>>>;
    async fn handle_range_formatting(
        &self,
        params: DocumentRangeFormattingParams,
    ) -> LspResult<Option<Vec<TextEdit>>>;
}

#[tower_lsp::async_trait]
impl HandleDiagnostics for Backend {
    /// Publish a full replacement diagnostic set for a document
    async fn publish_diagnostics(&self, uri: Url) {
        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return,
        };

        let result = validate_document(&doc_state.content);
        log::debug!(
            "validated {}: {} diagnostic(s)",
            uri,
            result.diagnostics.len()
        );

        let diagnostics: Vec<_> = result
            .diagnostics
            .into_iter()
            .map(|d| self.create_lsp_diagnostic(d))
            .collect();
        drop(docs); // Release the lock before the async publish

        self.client
            .publish_diagnostics(uri, diagnostics, None)
            .await;
    }

    fn create_lsp_diagnostic(
        &self,
        validation_diagnostic: validation::Diagnostic,
    ) -> tower_lsp::lsp_types::Diagnostic {
        use crate::validation::Severity;

        let severity = match validation_diagnostic.severity {
            Severity::Error => DiagnosticSeverity::ERROR,
            Severity::Warning => DiagnosticSeverity::WARNING,
        };

        let range = Range::new(
            Position::new(
                validation_diagnostic.range.start.line as u32,
                validation_diagnostic.range.start.character as u32,
            ),
            Position::new(
                validation_diagnostic.range.end.line as u32,
                validation_diagnostic.range.end.character as u32,
            ),
        );

        tower_lsp::lsp_types::Diagnostic::new(
            range,
            Some(severity),
            None,
            Some(validation_diagnostic.source.to_string()),
            validation_diagnostic.message,
            None,
            None,
        )
    }
}

#[tower_lsp::async_trait]
impl HandleFormatting for Backend {
    async fn handle_formatting(
        &self,
        params: DocumentFormattingParams,
    ) -> LspResult<Option<Vec<TextEdit>>> {
        let uri = params.text_document.uri;

        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return Ok(None),
        };

        let formatted = pretty_print(&doc_state.content);
        if formatted == doc_state.content {
            return Ok(Some(Vec::new()));
        }

        // Full document replacement: single edit from start to end
        Ok(Some(vec![TextEdit {
            range: doc_state.full_range(),
            new_text: formatted,
        }]))
    }

    async fn handle_range_formatting(
        &self,
        params: DocumentRangeFormattingParams,
    ) -> LspResult<Option<Vec<TextEdit>>> {
        let uri = params.text_document.uri;

        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return Ok(None),
        };

        // The selected substring is pretty-printed independently of the
        // rest of the document.
        let selection = doc_state.slice(params.range);
        let formatted = pretty_print(selection);
        if formatted == selection {
            return Ok(Some(Vec::new()));
        }

        Ok(Some(vec![TextEdit {
            range: params.range,
            new_text: formatted,
        }]))
    }
}

/// Snippet templates for the declaration kinds and the include directive.
pub fn completion_items() -> Vec<CompletionItem> {
    let snippets: [(&str, i64, &str); 7] = [
        ("tpi", 1, "tpi(${1:name}, ${2:plain}, ${3:formula})."),
        ("thf", 2, "thf(${1:name}, ${2:axiom}, ${3:formula})."),
        ("tff", 3, "tff(${1:name}, ${2:axiom}, ${3:formula})."),
        ("tcf", 4, "tcf(${1:name}, ${2:axiom}, ${3:clause})."),
        ("fof", 5, "fof(${1:name}, ${2:axiom}, ${3:formula})."),
        ("cnf", 6, "cnf(${1:name}, ${2:axiom}, ${3:clause})."),
        ("include", 7, "include('${1:filename}')."),
    ];

    snippets
        .iter()
        .map(|(label, data, insert_text)| CompletionItem {
            label: label.to_string(),
            kind: Some(CompletionItemKind::KEYWORD),
            insert_text: Some(insert_text.to_string()),
            insert_text_format: Some(InsertTextFormat::SNIPPET),
            data: Some(Value::from(*data)),
            ..Default::default()
        })
        .collect()
}

/// Fill in the per-kind description on completion resolve.
pub fn resolve_completion(mut item: CompletionItem) -> CompletionItem {
    let detail = match item.data.as_ref().and_then(Value::as_i64) {
        Some(1) => Some("TPTP process instruction"),
        Some(2) => Some("Typed higher-order formula declaration"),
        Some(3) => Some("Typed first-order formula declaration"),
        Some(4) => Some("Typed clause normal form declaration"),
        Some(5) => Some("First-order formula declaration"),
        Some(6) => Some("Clause normal form declaration"),
        Some(7) => Some("Include another TPTP file"),
        _ => None,
    };

    if let Some(detail) = detail {
        item.detail = Some(detail.to_string());
    }

    item
}
