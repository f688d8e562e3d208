//! Static table of known HTTP status codes.
//!
//! This is the single source of truth for every code the extension knows
//! about. Codes missing from this list (reserved or unassigned ranges) are
//! treated as unknown everywhere else in the crate.

use super::{StatusCategory, StatusCodeInfo};

use StatusCategory::*;

/// All known status codes, one record per code.
///
/// Ordering here is by code for readability, but nothing relies on it;
/// the derived indexes sort their own views.
pub(crate) const STATUS_CODES: &[StatusCodeInfo] = &[
    StatusCodeInfo {
        code: 100,
        title: "100 Continue",
        description: "The request headers were received and the client may continue with the request body.",
        category: Informational,
    },
    StatusCodeInfo {
        code: 101,
        title: "101 Switching Protocols",
        description: "The server accepted the client's request to switch to a different protocol.",
        category: Informational,
    },
    StatusCodeInfo {
        code: 102,
        title: "102 Processing",
        description: "The server has received the request and is still working on it, with no response ready yet.",
        category: WebDavOther,
    },
    StatusCodeInfo {
        code: 103,
        title: "103 Early Hints",
        description: "The server is sending preliminary headers ahead of the final response.",
        category: Informational,
    },
    StatusCodeInfo {
        code: 200,
        title: "200 OK",
        description: "The request succeeded; what the response carries depends on the HTTP method.",
        category: Success,
    },
    StatusCodeInfo {
        code: 201,
        title: "201 Created",
        description: "The request succeeded and a new resource was created as a result.",
        category: Success,
    },
    StatusCodeInfo {
        code: 202,
        title: "202 Accepted",
        description: "The request was accepted for processing, but processing is not finished.",
        category: Success,
    },
    StatusCodeInfo {
        code: 203,
        title: "203 Non-Authoritative Information",
        description: "The request succeeded, but the returned metadata may originate from another source.",
        category: Success,
    },
    StatusCodeInfo {
        code: 204,
        title: "204 No Content",
        description: "The request succeeded and there is no content to send back.",
        category: Success,
    },
    StatusCodeInfo {
        code: 205,
        title: "205 Reset Content",
        description: "The request succeeded and the client should reset its document view.",
        category: Success,
    },
    StatusCodeInfo {
        code: 206,
        title: "206 Partial Content",
        description: "The server is delivering the byte range the client asked for.",
        category: Success,
    },
    StatusCodeInfo {
        code: 207,
        title: "207 Multi-Status",
        description: "The response body carries several independent status values for separate operations.",
        category: WebDavOther,
    },
    StatusCodeInfo {
        code: 208,
        title: "208 Already Reported",
        description: "Members of a DAV binding were already enumerated earlier in the same response.",
        category: WebDavOther,
    },
    StatusCodeInfo {
        code: 226,
        title: "226 IM Used",
        description: "The server fulfilled a GET request after applying one or more instance manipulations.",
        category: Success,
    },
    StatusCodeInfo {
        code: 300,
        title: "300 Multiple Choices",
        description: "Several responses are possible and the client may pick one of them.",
        category: Redirection,
    },
    StatusCodeInfo {
        code: 301,
        title: "301 Moved Permanently",
        description: "The requested resource has moved to a new URI for good.",
        category: Redirection,
    },
    StatusCodeInfo {
        code: 302,
        title: "302 Found",
        description: "The requested resource temporarily lives under a different URI.",
        category: Redirection,
    },
    StatusCodeInfo {
        code: 303,
        title: "303 See Other",
        description: "The response is available at another URI and should be fetched with GET.",
        category: Redirection,
    },
    StatusCodeInfo {
        code: 304,
        title: "304 Not Modified",
        description: "The resource has not changed since the client's conditional headers were issued.",
        category: Redirection,
    },
    StatusCodeInfo {
        code: 305,
        title: "305 Use Proxy",
        description: "The resource must be reached through the proxy named by the server.",
        category: Redirection,
    },
    StatusCodeInfo {
        code: 306,
        title: "306 Switch Proxy",
        description: "Historical code once reserved for proxy switching; unused in modern HTTP.",
        category: Redirection,
    },
    StatusCodeInfo {
        code: 307,
        title: "307 Temporary Redirect",
        description: "The resource is temporarily at another URI and the method must not change.",
        category: Redirection,
    },
    StatusCodeInfo {
        code: 308,
        title: "308 Permanent Redirect",
        description: "The resource is permanently at another URI and the method must not change.",
        category: Redirection,
    },
    StatusCodeInfo {
        code: 400,
        title: "400 Bad Request",
        description: "The server cannot process the request because of a client-side error.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 401,
        title: "401 Unauthorized",
        description: "Authentication is required and was missing or failed.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 402,
        title: "402 Payment Required",
        description: "Reserved for future use.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 403,
        title: "403 Forbidden",
        description: "The server understood the request but refuses to authorize it.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 404,
        title: "404 Not Found",
        description: "The server cannot find the requested resource.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 405,
        title: "405 Method Not Allowed",
        description: "The request method is recognized but not supported for this resource.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 406,
        title: "406 Not Acceptable",
        description: "No response matching the request's acceptable content characteristics can be produced.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 407,
        title: "407 Proxy Authentication Required",
        description: "The client must authenticate with a proxy before the request can continue.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 408,
        title: "408 Request Timeout",
        description: "The client took longer to produce a request than the server was willing to wait.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 409,
        title: "409 Conflict",
        description: "The request conflicts with the current state of the target resource.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 410,
        title: "410 Gone",
        description: "The resource is no longer available and no forwarding address is known.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 411,
        title: "411 Length Required",
        description: "The server refuses the request without a valid Content-Length header.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 412,
        title: "412 Precondition Failed",
        description: "A precondition given in the request headers evaluated to false on the server.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 413,
        title: "413 Payload Too Large",
        description: "The request payload exceeds what the server is willing or able to process.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 414,
        title: "414 URI Too Long",
        description: "The request URI is longer than the server is willing to interpret.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 415,
        title: "415 Unsupported Media Type",
        description: "The media type of the request payload is not supported by the server.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 416,
        title: "416 Requested Range Not Satisfiable",
        description: "The requested byte range cannot be satisfied for the target resource.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 417,
        title: "417 Expectation Failed",
        description: "The server cannot meet the expectations of the Expect request header.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 418,
        title: "418 I'm a teapot",
        description: "An April Fools' code from RFC 2324 for coffee/teapot humor.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 421,
        title: "421 Misdirected Request",
        description: "The request reached a server that is unable to produce a response for it.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 422,
        title: "422 Unprocessable Entity",
        description: "The request syntax is understood but the contained instructions cannot be processed.",
        category: WebDavOther,
    },
    StatusCodeInfo {
        code: 423,
        title: "423 Locked",
        description: "The source or destination resource is locked.",
        category: WebDavOther,
    },
    StatusCodeInfo {
        code: 424,
        title: "424 Failed Dependency",
        description: "The request failed because a request it depended on failed.",
        category: WebDavOther,
    },
    StatusCodeInfo {
        code: 426,
        title: "426 Upgrade Required",
        description: "The server refuses to perform the request over the current protocol.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 428,
        title: "428 Precondition Required",
        description: "The origin server requires the request to be conditional to avoid lost updates.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 429,
        title: "429 Too Many Requests",
        description: "The client sent too many requests in a given amount of time.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 431,
        title: "431 Request Header Fields Too Large",
        description: "The server refuses to process the request because its header fields are too large.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 451,
        title: "451 Unavailable For Legal Reasons",
        description: "Access to the resource is denied as a consequence of a legal demand.",
        category: ClientError,
    },
    StatusCodeInfo {
        code: 500,
        title: "500 Internal Server Error",
        description: "An unexpected condition prevented the server from fulfilling the request.",
        category: ServerError,
    },
    StatusCodeInfo {
        code: 501,
        title: "501 Not Implemented",
        description: "The server lacks the functionality required to fulfill the request.",
        category: ServerError,
    },
    StatusCodeInfo {
        code: 502,
        title: "502 Bad Gateway",
        description: "The server, acting as a gateway or proxy, got an invalid upstream response.",
        category: ServerError,
    },
    StatusCodeInfo {
        code: 503,
        title: "503 Service Unavailable",
        description: "The server is temporarily unable to handle the request, typically from overload or maintenance.",
        category: ServerError,
    },
    StatusCodeInfo {
        code: 504,
        title: "504 Gateway Timeout",
        description: "The server, acting as a gateway or proxy, did not get an upstream response in time.",
        category: ServerError,
    },
    StatusCodeInfo {
        code: 505,
        title: "505 HTTP Version Not Supported",
        description: "The HTTP protocol version used in the request is not supported by the server.",
        category: ServerError,
    },
    StatusCodeInfo {
        code: 506,
        title: "506 Variant Also Negotiates",
        description: "Transparent content negotiation on the server is misconfigured.",
        category: ServerError,
    },
    StatusCodeInfo {
        code: 507,
        title: "507 Insufficient Storage",
        description: "The server cannot store the representation needed to finish the request.",
        category: WebDavOther,
    },
    StatusCodeInfo {
        code: 508,
        title: "508 Loop Detected",
        description: "The server found an infinite loop while processing the request.",
        category: WebDavOther,
    },
    StatusCodeInfo {
        code: 510,
        title: "510 Not Extended",
        description: "The request needs further extensions before the server can fulfill it.",
        category: ServerError,
    },
    StatusCodeInfo {
        code: 511,
        title: "511 Network Authentication Required",
        description: "The client must authenticate to gain access to the network.",
        category: ServerError,
    },
];
