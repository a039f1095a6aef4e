//! 4xx: the request contains bad syntax or cannot be fulfilled.

status_codes! {
    CLIENT_ERROR;

    /// The server cannot or will not process the request due to something perceived as a client error, e.g. malformed request syntax.
    BAD_REQUEST = 400, "Bad Request";
    /// The client must authenticate itself to get the requested response.
    UNAUTHORIZED = 401, "Unauthorized";
    /// Reserved for future use.
    PAYMENT_REQUIRED = 402, "Payment Required";
    /// The client does not have access rights to the content. Unlike 401, the client's identity is known to the server.
    FORBIDDEN = 403, "Forbidden";
    /// The server cannot find the requested resource.
    NOT_FOUND = 404, "Not Found";
    /// The request method is known by the server but is not supported by the target resource.
    METHOD_NOT_ALLOWED = 405, "Method Not Allowed";
    /// After server-driven content negotiation, no content was found that conforms to the criteria given by the user agent.
    NOT_ACCEPTABLE = 406, "Not Acceptable";
    /// Like 401, but authentication has to be done by a proxy.
    PROXY_AUTHENTICATION_REQUIRED = 407, "Proxy Authentication Required";
    /// The server would like to shut down this unused connection.
    REQUEST_TIMEOUT = 408, "Request Timeout";
    /// The request conflicts with the current state of the server.
    CONFLICT = 409, "Conflict";
    /// The requested content has been permanently deleted from the server, with no forwarding address.
    GONE = 410, "Gone";
    /// The server rejected the request because the `Content-Length` header is not defined and the server requires it.
    LENGTH_REQUIRED = 411, "Length Required";
    /// The client has indicated preconditions in its headers which the server does not meet.
    PRECONDITION_FAILED = 412, "Precondition Failed";
    /// The request entity is larger than limits defined by the server.
    PAYLOAD_TOO_LARGE = 413, "Payload Too Large";
    /// The URI requested by the client is longer than the server is willing to interpret.
    URI_TOO_LONG = 414, "URI Too Long";
    /// The media format of the requested data is not supported by the server.
    UNSUPPORTED_MEDIA_TYPE = 415, "Unsupported Media Type";
    /// The range specified by the `Range` header cannot be fulfilled.
    RANGE_NOT_SATISFIABLE = 416, "Range Not Satisfiable";
    /// The expectation indicated by the `Expect` request header cannot be met by the server.
    EXPECTATION_FAILED = 417, "Expectation Failed";
    /// The server refuses the attempt to brew coffee with a teapot.
    IM_A_TEAPOT = 418, "I'm a teapot";
    /// The request was directed at a server that is not able to produce a response.
    MISDIRECTED_REQUEST = 421, "Misdirected Request";
    /// The request was well-formed but was unable to be followed due to semantic errors. (WebDAV)
    UNPROCESSABLE_ENTITY = 422, "Unprocessable Entity";
    /// The resource that is being accessed is locked. (WebDAV)
    LOCKED = 423, "Locked";
    /// The request failed due to failure of a previous request. (WebDAV)
    FAILED_DEPENDENCY = 424, "Failed Dependency";
    /// The server is unwilling to risk processing a request that might be replayed.
    TOO_EARLY = 425, "Too Early";
    /// The server refuses to perform the request using the current protocol but might after the client upgrades to a different one.
    UPGRADE_REQUIRED = 426, "Upgrade Required";
    /// The origin server requires the request to be conditional, to prevent lost updates.
    PRECONDITION_REQUIRED = 428, "Precondition Required";
    /// The user has sent too many requests in a given amount of time ("rate limiting").
    TOO_MANY_REQUESTS = 429, "Too Many Requests";
    /// The server is unwilling to process the request because its header fields are too large.
    REQUEST_HEADER_FIELDS_TOO_LARGE = 431, "Request Header Fields Too Large";
    /// The user agent requested a resource that cannot legally be provided, such as a web page censored by a government.
    UNAVAILABLE_FOR_LEGAL_REASONS = 451, "Unavailable For Legal Reasons";
}
