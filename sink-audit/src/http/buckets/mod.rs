pub mod get_iam_policy;
