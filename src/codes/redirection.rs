//! 3xx: further action needs to be taken to complete the request.

status_codes! {
    REDIRECTION;

    /// The request has more than one possible response and the user agent or user should choose one of them.
    MULTIPLE_CHOICES = 300, "Multiple Choices";
    /// The URL of the requested resource has been changed permanently. The new URL is given in the `Location` header.
    MOVED_PERMANENTLY = 301, "Moved Permanently";
    /// The URI of the requested resource has been changed temporarily. Future requests should still use the same URI.
    FOUND = 302, "Found";
    /// Directs the client to get the requested resource at another URI with a GET request.
    SEE_OTHER = 303, "See Other";
    /// Used for caching: the response has not been modified, so the client can keep using its cached version.
    NOT_MODIFIED = 304, "Not Modified";
    /// The requested response must be accessed by a proxy. Deprecated due to security concerns.
    USE_PROXY = 305, "Use Proxy";
    /// No longer used; reserved.
    UNUSED = 306, "Unused";
    /// Like 302, but the user agent must not change the HTTP method used.
    TEMPORARY_REDIRECT = 307, "Temporary Redirect";
    /// Like 301, but the user agent must not change the HTTP method used.
    PERMANENT_REDIRECT = 308, "Permanent Redirect";
}
