mod register_request;
