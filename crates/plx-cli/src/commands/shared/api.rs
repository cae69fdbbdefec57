use plx_client::ApiError;

/// Turn a client error into the message a user should see.
pub trait ApiResultExt<T> {
    fn user_facing(self) -> anyhow::Result<T>;
}

impl<T> ApiResultExt<T> for Result<T, ApiError> {
    fn user_facing(self) -> anyhow::Result<T> {
        self.map_err(|error| {
            tracing::debug!(?error, "api call failed");
            anyhow::anyhow!(error.display_message())
        })
    }
}

#[cfg(test)]
mod tests {
    use plx_client::ApiError;

    use super::ApiResultExt;

    #[test]
    fn http_errors_use_backend_message() {
        let result: Result<(), ApiError> = Err(ApiError::Http {
            status: 404,
            message: "secret not found".into(),
        });
        let err = result.user_facing().expect_err("should fail");
        assert_eq!(err.to_string(), "secret not found");
    }

    #[test]
    fn success_passes_through() {
        let result: Result<u8, ApiError> = Ok(7);
        assert_eq!(result.user_facing().expect("ok"), 7);
    }
}
