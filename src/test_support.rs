use mockito::Request;

/// Matches requests carrying exactly one `Authorization` header.
pub(crate) fn single_authorization(request: &Request) -> bool {
    request.header("authorization").len() == 1
}
