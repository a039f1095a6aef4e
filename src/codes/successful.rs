//! 2xx: the request was received, understood and accepted.

status_codes! {
    SUCCESSFUL;

    /// The request succeeded. What that means depends on the method: the resource for GET, the result of the action for POST.
    OK = 200, "OK";
    /// The request succeeded and a new resource was created, typically in reply to POST or PUT.
    CREATED = 201, "Created";
    /// The request has been received but not yet acted upon. There is no way to later send the outcome of the processing.
    ACCEPTED = 202, "Accepted";
    /// The returned metadata was modified by a transforming proxy and is not exactly what the origin server sent.
    NON_AUTHORITATIVE_INFORMATION = 203, "Non-Authoritative Information";
    /// There is no content to send for this request, but the headers may be useful.
    NO_CONTENT = 204, "No Content";
    /// Tells the user agent to reset the document which sent this request, e.g. to clear a form.
    RESET_CONTENT = 205, "Reset Content";
    /// The body contains the requested ranges of data, as described by the `Range` header of the request.
    PARTIAL_CONTENT = 206, "Partial Content";
    /// Conveys information about multiple resources, for situations where multiple status codes might be appropriate. (WebDAV)
    MULTI_STATUS = 207, "Multi-Status";
    /// Used inside a `<dav:propstat>` element to avoid enumerating the internal members of multiple bindings to the same collection repeatedly. (WebDAV)
    ALREADY_REPORTED = 208, "Already Reported";
    /// The server fulfilled a GET request and the response is a representation of the result of one or more instance-manipulations. (HTTP Delta encoding)
    IM_USED = 226, "IM Used";
}
