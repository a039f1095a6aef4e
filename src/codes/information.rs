//! 1xx: the request was received and processing continues.

status_codes! {
    INFORMATION;

    /// Everything so far is OK and the client should continue with the request, or ignore this if it has already finished. Sent in reply to `Expect: 100-continue`.
    CONTINUE = 100, "Continue";
    /// The server switches to the protocol the client asked for in its `Upgrade` header.
    SWITCHING_PROTOCOLS = 101, "Switching Protocols";
    /// The server has received and is processing the request, but no response is available yet. (WebDAV)
    PROCESSING = 102, "Processing";
    /// Sent ahead of the final response, mainly with `Link` headers, so the user agent can start preloading resources.
    EARLY_HINTS = 103, "Early Hints";
}
