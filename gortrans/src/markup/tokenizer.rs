//! HTML to [`MarkupToken`] conversion on top of the html5ever tokenizer.
//!
//! Only the tokenizer stage runs; no tree is built. Character data between
//! two tags is coalesced into a single text token, since html5ever splits
//! runs at newlines and character references. The content of script, style
//! and the other raw-text elements (`noscript` included, as with scripting
//! enabled) is a single text token, never tags.

use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use html5ever::TokenizerResult;
use tracing::trace;

use super::token::{MarkupToken, StartTag};

/// Tokenize a whole page.
///
/// The returned sequence always ends with exactly one
/// [`MarkupToken::EndOfStream`]. Malformed markup never fails; the
/// tokenizer recovers the way browsers do.
pub fn tokenize(html: &str) -> Vec<MarkupToken> {
    let tokenizer = Tokenizer::new(Collector::default(), TokenizerOpts::default());

    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));

    while let TokenizerResult::Script(_) = tokenizer.feed(&input) {}
    tokenizer.end();

    tokenizer.sink.finish()
}

/// Token sink that records start tags and coalesced text.
#[derive(Default)]
struct Collector {
    tokens: RefCell<Vec<MarkupToken>>,
    text: RefCell<String>,
}

impl Collector {
    fn flush_text(&self) {
        let mut text = self.text.borrow_mut();
        if !text.is_empty() {
            self.tokens
                .borrow_mut()
                .push(MarkupToken::Text(std::mem::take(&mut *text)));
        }
    }

    fn start_tag(&self, tag: Tag) -> TokenSinkResult<()> {
        let name = tag.name.to_string();
        let attrs = tag
            .attrs
            .iter()
            .map(|a| (a.name.local.to_string(), String::from(&*a.value)))
            .collect();

        // Content of these elements is not markup.
        let next = match name.as_str() {
            "script" if !tag.self_closing => TokenSinkResult::RawData(RawKind::ScriptData),
            "style" | "xmp" | "iframe" | "noembed" | "noframes" | "noscript"
                if !tag.self_closing =>
            {
                TokenSinkResult::RawData(RawKind::Rawtext)
            }
            "title" | "textarea" if !tag.self_closing => {
                TokenSinkResult::RawData(RawKind::Rcdata)
            }
            _ => TokenSinkResult::Continue,
        };

        self.tokens
            .borrow_mut()
            .push(MarkupToken::StartTag(StartTag { name, attrs }));
        next
    }

    fn finish(&self) -> Vec<MarkupToken> {
        self.flush_text();
        let mut tokens = self.tokens.take();
        if tokens.last() != Some(&MarkupToken::EndOfStream) {
            tokens.push(MarkupToken::EndOfStream);
        }
        tokens
    }
}

impl TokenSink for Collector {
    type Handle = ();

    fn process_token(&self, token: Token, line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(chars) => {
                self.text.borrow_mut().push_str(&chars);
            }
            Token::TagToken(tag) => {
                self.flush_text();
                if tag.kind == TagKind::StartTag {
                    return self.start_tag(tag);
                }
            }
            Token::EOFToken => {
                self.flush_text();
                let mut tokens = self.tokens.borrow_mut();
                if tokens.last() != Some(&MarkupToken::EndOfStream) {
                    tokens.push(MarkupToken::EndOfStream);
                }
            }
            Token::ParseError(msg) => {
                trace!(line = line_number, error = %msg, "markup parse error");
            }
            Token::CommentToken(_) | Token::DoctypeToken(_) => self.flush_text(),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}
