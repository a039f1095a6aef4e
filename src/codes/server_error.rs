//! 5xx: the server failed to fulfill an apparently valid request.

status_codes! {
    SERVER_ERROR;

    /// The server has encountered a situation it does not know how to handle.
    INTERNAL_SERVER_ERROR = 500, "Internal Server Error";
    /// The request method is not supported by the server and cannot be handled.
    NOT_IMPLEMENTED = 501, "Not Implemented";
    /// The server, while working as a gateway, got an invalid response.
    BAD_GATEWAY = 502, "Bad Gateway";
    /// The server is not ready to handle the request, e.g. because it is down for maintenance or overloaded.
    SERVICE_UNAVAILABLE = 503, "Service Unavailable";
    /// The server is acting as a gateway and cannot get a response in time.
    GATEWAY_TIMEOUT = 504, "Gateway Timeout";
    /// The HTTP version used in the request is not supported by the server.
    HTTP_VERSION_NOT_SUPPORTED = 505, "HTTP Version Not Supported";
    /// The server has an internal configuration error: transparent content negotiation results in a circular reference.
    VARIANT_ALSO_NEGOTIATES = 506, "Variant Also Negotiates";
    /// The method could not be performed on the resource because the server is unable to store the representation. (WebDAV)
    INSUFFICIENT_STORAGE = 507, "Insufficient Storage";
    /// The server detected an infinite loop while processing the request. (WebDAV)
    LOOP_DETECTED = 508, "Loop Detected";
    /// Further extensions to the request are required for the server to fulfill it.
    NOT_EXTENDED = 510, "Not Extended";
    /// The client needs to authenticate to gain network access.
    NETWORK_AUTHENTICATION_REQUIRED = 511, "Network Authentication Required";
}
