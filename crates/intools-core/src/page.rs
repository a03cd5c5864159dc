// SPDX-License-Identifier: Apache-2.0

//! HTML bodies served by the directory.

use std::borrow::Cow;

use crate::config::Profile;

/// Landing page with the employee search form.
pub const INDEX_HTML: &str = r"
    <html><body>
    <h2>Internal Employee Directory</h2>
    <form action='/search'>
        Search employee: <input name='name'> <input type='submit' value='Search'>
    </form>
    <p><small>Powered by InternalTools v1.0</small></p>
    </body></html>
    ";

/// Generic body for any failed request. Carries no diagnostic detail.
pub const SERVER_ERROR_HTML: &str = "<html><body><h1>Internal Server Error</h1>\
<p>The server encountered an internal error and was unable to complete your request.</p>\
</body></html>";

/// Wraps search output in the results fragment.
///
/// The hardened profile HTML-escapes `output`; the vulnerable profile embeds it verbatim.
#[must_use]
pub fn render_search_results(output: &str, profile: Profile) -> String {
    let body: Cow<'_, str> = match profile {
        Profile::Hardened => html_escape::encode_safe(output),
        Profile::Vulnerable => Cow::Borrowed(output),
    };
    format!("<pre>{body}</pre><a href='/'>Back</a>")
}
